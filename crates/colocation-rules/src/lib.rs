//! Reserved for colocation rule generation (pattern pairs with a conditional
//! probability above `min_cond_prob`). Not yet implemented; the core mining
//! pipeline does not depend on this crate.

#![allow(dead_code)]

use colocation_core::PatternSignature;

/// A candidate rule `lhs -> rhs` with its conditional probability. Nothing
/// in the pipeline constructs this type yet.
pub struct Rule {
    pub lhs: PatternSignature,
    pub rhs: PatternSignature,
    pub conditional_probability: f64,
}
