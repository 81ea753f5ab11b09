#![cfg(test)]

mod pipeline;
mod util;
