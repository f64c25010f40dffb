pub mod dialog;
pub mod extractor;
pub mod search;
pub mod speech;
pub mod storage;
pub mod voice_chat;
