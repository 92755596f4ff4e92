use crate::models::{DisplayInfo, ResultKind, VibeLevel};

/// Display copy for a vibe level
pub fn describe_vibe_level(level: VibeLevel) -> DisplayInfo {
    match level {
        VibeLevel::Soulmates => DisplayInfo {
            label: "Soulmates",
            emoji: "💕",
            message: "You're in their head!",
            color: "#ff6b9d",
        },
        VibeLevel::SameWavelength => DisplayInfo {
            label: "Same Wavelength",
            emoji: "✨",
            message: "Great minds think alike",
            color: "#00e5ff",
        },
        VibeLevel::BeautifullyDifferent => DisplayInfo {
            label: "Beautifully Different",
            emoji: "🌈",
            message: "Opposites attract!",
            color: "#bf5af2",
        },
    }
}

/// Display copy for a guess or compare result
pub fn describe_result_kind(kind: ResultKind) -> DisplayInfo {
    // Positive and negative results share a color across both label pairs
    let color = if kind.is_positive() { "#06d6a0" } else { "#ef476f" };

    match kind {
        ResultKind::Correct => DisplayInfo {
            label: "Correct!",
            emoji: "🧠",
            message: "You read them like a book! 🧠✨",
            color,
        },
        ResultKind::Wrong => DisplayInfo {
            label: "Wrong!",
            emoji: "😅",
            message: "Not quite — but now you know! 😅",
            color,
        },
        ResultKind::Match => DisplayInfo {
            label: "You matched!",
            emoji: "✨",
            message: "Same wavelength! You both picked the same thing! ✨",
            color,
        },
        ResultKind::Different => DisplayInfo {
            label: "Different picks!",
            emoji: "🫣",
            message: "Different vibes — opposites attract? 🫣",
            color,
        },
    }
}
