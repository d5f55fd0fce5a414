pub mod assemble;
mod constants;
pub mod fit;
pub mod layout;
mod options;
mod report;
mod types;
pub mod units;

pub use assemble::{Assembly, ImageInput, PageRecord, assemble, load_images, save_pdf};
pub use fit::{FittedImage, fit_to_frame};
pub use layout::{PagePlan, Rect, plan_page};
pub use options::FramePrintOptions;
pub use report::{AssemblyReport, SkippedImage};
pub use types::*;
