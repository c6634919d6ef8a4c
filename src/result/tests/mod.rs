#[cfg(test)]
mod result;
