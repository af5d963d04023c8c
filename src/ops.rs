mod add;
mod cmp;
mod common;
mod div;
mod mul;
mod rem;

pub(crate) use add::{add_impl, sub_impl};
pub(crate) use cmp::cmp_impl;
pub(crate) use common::{trim_integral, trim_wide, with_sign};
pub(crate) use div::div_impl;
pub(crate) use mul::mul_impl;
pub(crate) use rem::rem_impl;
