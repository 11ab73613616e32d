pub mod exam;
pub mod loaders;
pub mod update;

pub use exam::{ExamConfig, ExamSection, GeneratedFiles, PaperType};
pub use loaders::{load_exam_config, load_exam_config_or_default};
pub use update::{ConfigUpdate, ScalarField, SectionField};
