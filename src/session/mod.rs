// Interactive session — console abstraction and the controller that drives it.

pub mod console;
pub mod controller;
