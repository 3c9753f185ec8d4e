mod integration;
mod random;
