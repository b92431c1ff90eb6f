/// The computation a [`Module`](crate::Module) delegates to.
pub trait Calculator {
    fn calculate(&self, input: i32) -> i32;
}

/// Placeholder logic: doubles its input, wrapping on overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Doubling;

impl Calculator for Doubling {
    fn calculate(&self, input: i32) -> i32 {
        input.wrapping_mul(2)
    }
}

impl<F> Calculator for F
where
    F: Fn(i32) -> i32,
{
    fn calculate(&self, input: i32) -> i32 {
        self(input)
    }
}
