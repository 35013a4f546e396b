mod scripted;

pub use scripted::ScriptedChatResponder;
