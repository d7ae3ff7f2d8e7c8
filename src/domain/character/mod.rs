//! Character Context - 角色限界上下文
//!
//! 角色是独立的顶层记录，通过 novel_id 弱引用小说（不校验、不级联）

mod aggregate;
mod value_objects;

pub use aggregate::{Character, CharacterFields, CharacterPatch, NewCharacter, DEFAULT_CHARACTER_NAME};
pub use value_objects::CharacterRole;
