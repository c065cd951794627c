/*
    Saturating arithmetic on primitives
*/

mod float;
mod integer;

pub(crate) use integer::pow_by_squaring;
