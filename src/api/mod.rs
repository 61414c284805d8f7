pub mod ai;
pub mod export;
pub mod metrics;
pub mod palette;

pub use ai::{__path_handle_image_suggestion, __path_handle_text_suggestion};
pub use ai::{
    handle_image_suggestion, handle_text_suggestion, ImageSuggestionRequest,
    TextSuggestionRequest,
};
pub use export::{handle_export, ExportRequest, __path_handle_export};
pub use metrics::{__path_handle_contrast, __path_handle_simulate};
pub use metrics::{handle_contrast, handle_simulate, SimulateResponse};
pub use palette::{__path_handle_describe, __path_handle_edit, __path_handle_generate};
pub use palette::{
    handle_describe, handle_edit, handle_generate, DescribeRequest, DescribeResponse, EditOp,
    EditRequest, GenerateRequest, PaletteResponse,
};
