// src/content.rs
//
// Static page copy.

use crate::form::Field;

pub const CLUB_NAME: &str = "JLM MUNDIAPOLIS";
pub const CLUB_DISPLAY_NAME: &str = "JLM Mundiapolis";
pub const TAGLINE: &str = "Agir ensemble pour un avenir meilleur";
pub const LOGO_SRC: &str = "assets/logo.svg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "À propos", anchor: "about" },
    NavLink { label: "Activités", anchor: "activities" },
    NavLink { label: "Photos & Vidéos", anchor: "social" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const ABOUT_TITLE: &str = "À propos de nous";

/// (bold lead-in, rest of the paragraph)
pub const ABOUT_PARAGRAPHS: &[(Option<&str>, &str)] = &[
    (
        Some("JLM MUNDIAPOLIS "),
        "est un club universitaire dynamique qui rassemble des étudiants passionnés et engagés de l'Université Mundiapolis.",
    ),
    (
        None,
        "Notre mission est de créer un environnement où les étudiants peuvent développer leurs compétences, contribuer à la société et s'épanouir personnellement à travers diverses activités et initiatives.",
    ),
    (
        None,
        "Nous croyons au pouvoir de l'action collective et à l'impact positif que nous pouvons avoir ensemble sur notre communauté et au-delà.",
    ),
];

pub const ACTIVITIES_TITLE: &str = "Nos Activités";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    pub icon: &'static str,
    pub title: &'static str,
    pub border_class: &'static str,
    pub text_class: &'static str,
    /// Icon sways the other way.
    pub reverse: bool,
    pub items: &'static [&'static str],
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        icon: "❤️",
        title: "Activités Humanitaires",
        border_class: "border-red-400",
        text_class: "text-red-500",
        reverse: false,
        items: &[
            "Collectes de dons",
            "Visites aux orphelinats",
            "Campagnes de sensibilisation",
            "Actions environnementales",
            "Sensibilisation aux enjeux sociétaux",
        ],
    },
    Activity {
        icon: "🌱",
        title: "Développement Personnel",
        border_class: "border-green-400",
        text_class: "text-green-500",
        reverse: true,
        items: &[
            "Ateliers de soft skills",
            "Formations professionnelles",
            "Conférences thématiques",
            "Débats et tables rondes",
            "Programmes de leadership",
        ],
    },
    Activity {
        icon: "🏆",
        title: "Activités Sportives",
        border_class: "border-yellow-400",
        text_class: "text-yellow-500",
        reverse: false,
        items: &[
            "Tournois sportifs",
            "Séances d'entraînement",
            "Compétitions interuniversitaires",
            "Activités de plein air",
            "Événements sportifs caritatifs",
        ],
    },
];

pub const SOCIAL_TITLE: &str = "Nos Photos et Vidéos";
pub const SOCIAL_INTRO: &str =
    "Découvrez nos activités en images et vidéos sur nos réseaux sociaux !";
pub const SOCIAL_OUTRO: &str =
    "Suivez-nous pour ne rien manquer de nos événements et activités !";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialChannel {
    pub name: &'static str,
    pub icon: &'static str,
    pub footer_icon: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub href: &'static str,
    pub badge_class: &'static str,
    pub button_class: &'static str,
    pub reverse: bool,
}

pub const SOCIAL_CHANNELS: &[SocialChannel] = &[
    SocialChannel {
        name: "TikTok",
        icon: "📱",
        footer_icon: "🎬",
        blurb: "Retrouvez nos vidéos d'activités, challenges et moments forts",
        cta: "Voir nos vidéos",
        href: "https://www.tiktok.com/@jlm_mundiapolis?_t=ZM-8vJi0hfLJYd&_r=1",
        badge_class: "bg-black",
        button_class: "bg-black hover:bg-gray-800",
        reverse: false,
    },
    SocialChannel {
        name: "Instagram",
        icon: "📸",
        footer_icon: "📸",
        blurb: "Explorez nos galeries photos, stories et moments partagés",
        cta: "Voir nos photos",
        href: "https://www.instagram.com/jlm_mundiapolis?igshid=YmMyMTA2M2Y=",
        badge_class: "bg-gradient-to-r from-purple-500 to-pink-500",
        button_class: "bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600",
        reverse: true,
    },
];

pub const CONTACT_TITLE: &str = "📬";
pub const CONTACT_LABELS: [(Field, &str); 3] = [
    (Field::Name, "Nom & Prénom"),
    (Field::Email, "Email"),
    (Field::Message, "Message"),
];
pub const SUBMIT_LABEL: &str = "Envoyer";
pub const CONFIRMATION: &str =
    "Merci pour votre message ! Nous vous répondrons dès que possible.";

pub fn copyright(year: u32) -> String {
    format!("© {year} {CLUB_DISPLAY_NAME}. Tous droits réservés.")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ids given to the rendered <section> elements.
    const SECTION_IDS: &[&str] = &["hero", "about", "activities", "social", "contact"];

    #[test]
    fn every_nav_link_targets_a_section() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.anchor),
                "{} points at missing #{}",
                link.label,
                link.anchor
            );
        }
    }

    #[test]
    fn each_activity_lists_five_items() {
        assert_eq!(ACTIVITIES.len(), 3);
        assert!(ACTIVITIES.iter().all(|a| a.items.len() == 5));
    }

    #[test]
    fn social_links_are_https() {
        assert!(SOCIAL_CHANNELS.iter().all(|c| c.href.starts_with("https://")));
    }

    #[test]
    fn contact_labels_cover_every_field() {
        let labelled: Vec<Field> = CONTACT_LABELS.iter().map(|(f, _)| *f).collect();
        assert_eq!(labelled, Field::ALL.to_vec());
    }

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(
            copyright(2026),
            "© 2026 JLM Mundiapolis. Tous droits réservés."
        );
    }
}
