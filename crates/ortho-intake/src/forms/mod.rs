//! One [`crate::Questionnaire`] implementation per wizard form.
//!
//! Each module also exposes `normalize` and `empty` for its form, so callers
//! that know the concrete form do not need the generic functions.

pub mod client;
pub mod insoles;
pub mod osa;
pub mod osb;
pub mod ovac;
pub mod pulman;
pub mod rebacare;
pub mod vlos;
