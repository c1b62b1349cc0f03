//! Preventive maintenance plans: the schedule list and the plan editor.

pub mod plan_editor;
pub mod plans;
