/*! Names of the spans and events that the transformations emit through `tracing`. */

// log span types:
/// Inside a DNF transformation.
pub const DNF: &str = "@dnf";

/// Inside a CNF transformation.
pub const CNF: &str = "@cnf";

// log event types:
/// A pairwise distribution step combined two clause sets.
pub const FOLD: &str = "@fold";

/// A normal form is computed.
pub const NORMAL_FORM: &str = "@normal_form";
