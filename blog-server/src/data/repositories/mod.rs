pub(crate) mod mongo;

#[cfg(test)]
pub(crate) mod memory;
