//! UUID generator

use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct UuidOptions {
    pub uppercase: bool,
    pub hyphens: bool,
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            hyphens: true,
        }
    }
}

/// `count` random (version 4) UUIDs
pub fn generate(count: usize, options: UuidOptions) -> Vec<String> {
    (0..count)
        .map(|_| {
            let id = Uuid::new_v4();
            let text = if options.hyphens {
                id.hyphenated().to_string()
            } else {
                id.simple().to_string()
            };
            if options.uppercase {
                text.to_uppercase()
            } else {
                text
            }
        })
        .collect()
}
