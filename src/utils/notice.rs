use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use super::BankError;

const SUCCESS_COLOR: u32 = 0x00ff00;
const ERROR_COLOR: u32 = 0xff0000;

/// Discord rejects embeds whose description is longer than this many characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
/// Recipients are free text and can be as long as a whole chat message.
pub const COUNTERPARTY_DISPLAY_LIMIT: usize = 64;

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Transient confirmation shown after an action succeeds.
pub fn success(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::default()
        .title(title)
        .description(description)
        .color(SUCCESS_COLOR)
}

/// Notification for a failed command.
pub fn failure(error: &BankError) -> CreateEmbed {
    let description = match error {
        BankError::Discord(e) if e.to_string().contains("429") => {
            "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
        }
        other => format!("❌ {}", other),
    };

    CreateEmbed::default()
        .title(error.title())
        .description(description)
        .color(ERROR_COLOR)
}

/// Attach the "signed in as" footer used on dashboard panels.
pub fn with_user_footer(embed: CreateEmbed, display_name: &str, is_admin: bool) -> CreateEmbed {
    let display_name = clip(display_name, COUNTERPARTY_DISPLAY_LIMIT);
    let text = if is_admin {
        format!("👑 {} · Administrator", display_name)
    } else {
        format!("👤 {}", display_name)
    };
    embed.footer(CreateEmbedFooter::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("Ozon", 64), "Ozon");
        assert_eq!(clip("abcdef", 4), "abc…");
        assert_eq!(clip("•••••", 3), "••…");
        assert_eq!(clip(&"x".repeat(2000), COUNTERPARTY_DISPLAY_LIMIT).chars().count(), 64);
    }
}
