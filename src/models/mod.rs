pub mod climate;
pub mod levels;
pub mod month;
pub mod report;
pub mod soil;
pub mod variety;
pub mod zone;

pub use climate::{ClimateRecord, MonthlyClimate};
pub use levels::{ClimateClass, FertilityLevel, RiskLevel, Tolerance};
pub use month::Month;
pub use report::{AdvisoryReport, AdvisoryRequest, FertilizerPlan, IrrigationPlan, RiskProfile};
pub use soil::SoilRecord;
pub use variety::{GrainType, MaturityGroup, VarietyRecord};
pub use zone::{AgroZone, StateProfile};
