mod padding;
mod permutation;
mod session;
