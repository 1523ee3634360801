//! UI Components
//!
//! Pages and the reusable pieces they are built from.

mod add_class_form;
mod all_classes;
mod class_card;
mod delete_confirm_button;
mod item_chips;
mod rename_prompt;
mod today_classes;

pub use add_class_form::AddClassForm;
pub use all_classes::AllClassesPage;
pub use class_card::{ClassCard, EmptyCard};
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_chips::ItemChips;
pub use rename_prompt::RenamePrompt;
pub use today_classes::TodayClassesPage;
