mod secp256k1;

pub use secp256k1::*;
