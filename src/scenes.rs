//! The three vignettes of the hero demo loop.

pub mod automation;
pub mod chat;
pub mod document;

use crate::scene::Scene;

/// Scene order of the default composition: chat, document, automation.
pub fn hero_demo_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(chat::ChatScene::default()),
        Box::new(document::DocumentScene::default()),
        Box::new(automation::AutomationScene::default()),
    ]
}
