//! Localized widget labels

use crate::domain::Language;

/// Static label set for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub profile: &'static str,
    pub likes: &'static str,
    pub show_comments: &'static str,
    pub show_likes: &'static str,
    pub see_on: &'static str,
    pub original_post: &'static str,
    pub posted_on: &'static str,
    pub external_link: &'static str,
    pub youtube_link: &'static str,
    pub error: &'static str,
}

const EN: Labels = Labels {
    profile: "profile",
    likes: "Likes",
    show_comments: "Show comments",
    show_likes: "Show likes",
    see_on: "See on",
    original_post: "Original post on",
    posted_on: "Posted on",
    external_link: "External link",
    youtube_link: "YouTube link",
    error: "The Facebook wall could not be loaded.",
};

const DE: Labels = Labels {
    profile: "Profil",
    likes: "Gefällt mir",
    show_comments: "Kommentare anzeigen",
    show_likes: "Likes anzeigen",
    see_on: "Ansehen auf",
    original_post: "Originalbeitrag auf",
    posted_on: "Veröffentlicht am",
    external_link: "Externer Link",
    youtube_link: "YouTube-Link",
    error: "Die Facebook-Pinnwand konnte nicht geladen werden.",
};

impl Labels {
    pub fn for_language(lang: Language) -> &'static Labels {
        match lang {
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}
