#[cfg(test)]
mod frame;
