// Analysis — Jaccard similarity and single-word verification.

pub mod jaccard;
pub mod verify;
