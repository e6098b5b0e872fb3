pub mod stage1_samples;
pub mod stage2_compare;
pub mod stage3_report;
