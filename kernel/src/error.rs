use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    NotFound,
    Conflict,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Referenced entity does not exist"),
            KernelError::Conflict => write!(f, "Operation conflicts with the current rental state"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
