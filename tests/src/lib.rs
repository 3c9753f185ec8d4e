#[cfg(test)]
mod msf;
