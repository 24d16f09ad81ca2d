//! Localized content for every supported language.
//!
//! Both translations share one shape. The only field allowed to differ in
//! presence is a project's optional link (and year), which is modelled as an
//! `Option` on every language alike.

use crate::i18n::Language;
use serde::Serialize;

/// Project category used by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Academic,
    Personal,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 2] = [ProjectCategory::Academic, ProjectCategory::Personal];

    /// Key used in query strings and JSON ("academic", "personal").
    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Academic => "academic",
            ProjectCategory::Personal => "personal",
        }
    }
}

/// All localized content for a language
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub meta: Meta,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub experience: ExperienceBlock,
    pub education: EducationBlock,
    pub projects: ProjectsBlock,
    pub languages: LanguagesBlock,
    pub interests: InterestsBlock,
    pub contact: Contact,
}

/// Document title and meta description
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Nav {
    pub about: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub greeting: &'static str,
    pub title: &'static str,
    /// Placeholders: {{age}}
    pub subtitle: &'static str,
    pub location: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub intro: &'static str,
    pub highlights: &'static [&'static str],
    pub birth_date_label: &'static str,
    /// Unit rendered after the computed age ("ans", "years old")
    pub age_suffix: &'static str,
    pub email_label: &'static str,
    pub location_label: &'static str,
    pub location_value: &'static str,
    pub socials_label: &'static str,
    pub download_resume: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceBlock {
    pub title: &'static str,
    pub items: &'static [Experience],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub title: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationBlock {
    pub title: &'static str,
    pub items: &'static [Education],
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Unique within a language's project list
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsBlock {
    pub title: &'static str,
    pub filter_all: &'static str,
    pub filter_academic: &'static str,
    pub filter_personal: &'static str,
    pub link_label: &'static str,
    pub items: &'static [Project],
}

impl ProjectsBlock {
    /// Localized label for a category badge or filter button.
    pub fn category_label(&self, category: ProjectCategory) -> &'static str {
        match category {
            ProjectCategory::Academic => self.filter_academic,
            ProjectCategory::Personal => self.filter_personal,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageLevel {
    pub label: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguagesBlock {
    pub title: &'static str,
    pub items: &'static [LanguageLevel],
}

#[derive(Debug, Clone, Serialize)]
pub struct InterestsBlock {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email_label: &'static str,
    pub social_label: &'static str,
}

impl Translation {
    /// Hero subtitle with the `{{age}}` placeholder filled in.
    pub fn hero_subtitle(&self, age: u32) -> String {
        self.hero.subtitle.replace("{{age}}", &age.to_string())
    }
}

/// Look up the localized content for a language.
///
/// Every `Language` value resolves; there is no partial lookup.
pub fn for_language(language: Language) -> &'static Translation {
    match language {
        Language::French => &FRENCH_TRANSLATION,
        Language::English => &ENGLISH_TRANSLATION,
    }
}

// ==================== French Content ====================

pub static FRENCH_TRANSLATION: Translation = Translation {
    meta: Meta {
        title: "Thomas Chevalier — Portfolio",
        description: "Portfolio bilingue de Thomas Chevalier, développeur web et passionné d’IA. Découvrez ses projets, expériences et compétences.",
    },
    nav: Nav {
        about: "À propos",
        experience: "Expériences",
        projects: "Projets",
        contact: "Contact",
    },
    hero: Hero {
        greeting: "Bonjour, je suis",
        title: "Thomas Chevalier",
        subtitle: "Je suis un étudiant de {{age}} ans en intelligence artificielle, curieux et en quête de nouvelles opportunités.",
        location: "Actuellement à Reims, France.",
        call_to_action: "Explorer mon travail",
    },
    about: About {
        title: "Profil",
        intro: "Étudiant en master d’intelligence artificielle à Reims, j’aime concevoir des expériences web soignées où la donnée et le design se rencontrent.",
        highlights: &[
            "IA & design, main dans la main",
            "Expériences web soignées et humaines",
            "Toujours prêt à explorer de nouvelles idées",
        ],
        birth_date_label: "Âge",
        age_suffix: "ans",
        email_label: "E-mail",
        location_label: "Basé à",
        location_value: "Reims, France",
        socials_label: "Réseaux",
        download_resume: "Télécharger mon CV",
    },
    experience: ExperienceBlock {
        title: "Expériences professionnelles",
        items: &[
            Experience {
                title: "Développeur",
                company: "Institut FEMTO-ST",
                location: "Belfort, France",
                period: "Janvier — Mai 2025",
                description: &[
                    "Amélioration d’un simulateur MATLAB de profils énergétiques résidentiels (modèle CREST).",
                    "Intégration d’un pas de temps variable pour optimiser les calculs et réduire les coûts de simulation.",
                    "Refonte partielle du code et documentation technique sous LaTeX.",
                    "Validation statistique approfondie par simulations.",
                ],
                skills: &["MATLAB", "Git", "LaTeX", "Modélisation", "Simulation énergétique"],
            },
            Experience {
                title: "Développeur web",
                company: "Groupe Brangeon",
                location: "Ingrandes-Le Fresne-sur-Loire, France",
                period: "Avril — Juin 2024",
                description: &[
                    "Participation à une équipe de développement sur un framework interne PHP.",
                    "Application de calcul d’empreinte carbone pour les clients.",
                    "Application de gestion de tickets avec interface drag-and-drop.",
                    "Gestion et visualisation de données via SQL et JavaScript/jQuery.",
                ],
                skills: &["PHP", "JavaScript", "jQuery", "SQL", "Développement web"],
            },
        ],
    },
    education: EducationBlock {
        title: "Formation",
        items: &[
            Education {
                title: "Master — Intelligence Artificielle",
                school: "Université de Reims Champagne-Ardenne (URCA)",
                period: "2025 — 2027",
            },
            Education {
                title: "BUT Informatique",
                school: "IUT Nord Franche-Comté",
                period: "2022 — 2025",
            },
        ],
    },
    projects: ProjectsBlock {
        title: "Projets sélectionnés",
        filter_all: "Tous",
        filter_academic: "Universitaires",
        filter_personal: "Personnels",
        link_label: "Voir le projet",
        items: &[
            Project {
                title: "SentiMarket",
                subtitle: "Plateforme d’analyse financière par sentiments",
                description: &[
                    "Agrégation de données économiques et d’actualités financières.",
                    "Analyse des corrélations entre les nouvelles et les cours boursiers grâce à FinBERT.",
                ],
                technologies: &["Vue.js", "Node.js", "Python", "FinBERT", "API financières"],
                category: ProjectCategory::Personal,
                link: Some("https://github.com/chevalierthomas/SentiMarket"),
                year: Some("2025"),
            },
            Project {
                title: "Jeux Olympiques — Cérémonie d’ouverture",
                subtitle: "Application interactive de présentation",
                description: &[
                    "Expérience utilisateur immersive basée sur des données officielles.",
                    "Collaboration agile avec intégration continue et API Node.js.",
                ],
                technologies: &["Vue.js", "Node.js", "Axios", "GitHub", "Agile"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2023"),
            },
            Project {
                title: "Application de gestion de course à pied",
                subtitle: "Analyse de données biométriques",
                description: &[
                    "Pipeline de préparation de données et de prédiction de performances.",
                    "API REST pour exposer les résultats analytiques.",
                ],
                technologies: &["Python", "Pandas", "Scikit-learn", "API REST"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2024"),
            },
            Project {
                title: "Application iOS de e-commerce de chaussures d’escalade",
                subtitle: "Expérience d’achat spécialisée pour grimpeurs",
                description: &[
                    "Parcours mobile complet pour découvrir et acheter des chaussures d’escalade spécialisées.",
                    "Catalogue connecté à une API REST avec gestion des stocks et des avis clients.",
                    "Interface SwiftUI soignée avec paiement sécurisé et mode hors ligne.",
                ],
                technologies: &["Swift", "SwiftUI", "REST API", "Firebase"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2024"),
            },
        ],
    },
    languages: LanguagesBlock {
        title: "Langues",
        items: &[
            LanguageLevel {
                label: "Français",
                level: "Langue maternelle",
            },
            LanguageLevel {
                label: "Anglais",
                level: "Avancé",
            },
        ],
    },
    interests: InterestsBlock {
        title: "Centres d’intérêt",
        items: &[
            "Photographie",
            "Voyages et découverte du monde",
            "Économie",
            "Musique",
            "Bricolage (électronique, développement, DIY)",
            "Comprendre le monde via les médias et la technologie",
        ],
    },
    contact: Contact {
        title: "Entrons en contact",
        subtitle: "Disponible pour des opportunités en IA, data science ou développement web. Discutons de vos projets !",
        email_label: "Envoyez-moi un e-mail",
        social_label: "Suivez-moi",
    },
};

// ==================== English Content ====================

pub static ENGLISH_TRANSLATION: Translation = Translation {
    meta: Meta {
        title: "Thomas Chevalier — Portfolio",
        description: "Bilingual portfolio of Thomas Chevalier, web developer and AI enthusiast. Explore projects, experience and skills.",
    },
    nav: Nav {
        about: "About",
        experience: "Experience",
        projects: "Projects",
        contact: "Contact",
    },
    hero: Hero {
        greeting: "Hello, I am",
        title: "Thomas Chevalier",
        subtitle: "I am a {{age}}-year-old AI student, curious and eager to explore new opportunities.",
        location: "Currently based in Reims, France.",
        call_to_action: "See my work",
    },
    about: About {
        title: "Profile",
        intro: "Master’s student in artificial intelligence based in Reims, I enjoy crafting thoughtful web experiences where data and design meet.",
        highlights: &[
            "Where AI meets delightful design",
            "Thoughtful web experiences with a human touch",
            "Curious mind, always exploring",
        ],
        birth_date_label: "Age",
        age_suffix: "years old",
        email_label: "Email",
        location_label: "Based in",
        location_value: "Reims, France",
        socials_label: "Socials",
        download_resume: "Download my resume",
    },
    experience: ExperienceBlock {
        title: "Professional experience",
        items: &[
            Experience {
                title: "Developer",
                company: "Institut FEMTO-ST",
                location: "Belfort, France",
                period: "January — May 2025",
                description: &[
                    "Improved a MATLAB simulator for residential energy profiles (CREST model).",
                    "Integrated variable time steps to optimise computation and reduce simulation costs.",
                    "Led partial refactor and wrote technical documentation with LaTeX.",
                    "Conducted statistical validation through extensive simulations.",
                ],
                skills: &["MATLAB", "Git", "LaTeX", "Modelling", "Energy simulation"],
            },
            Experience {
                title: "Web developer",
                company: "Groupe Brangeon",
                location: "Ingrandes-Le Fresne-sur-Loire, France",
                period: "April — June 2024",
                description: &[
                    "Worked within a PHP internal framework as part of a feature squad.",
                    "Built a carbon footprint calculator for clients.",
                    "Developed a ticket management app with drag-and-drop interface.",
                    "Handled SQL data pipelines and dynamic UI using JavaScript/jQuery.",
                ],
                skills: &["PHP", "JavaScript", "jQuery", "SQL", "Web development"],
            },
        ],
    },
    education: EducationBlock {
        title: "Education",
        items: &[
            Education {
                title: "Master — Artificial Intelligence",
                school: "Université de Reims Champagne-Ardenne (URCA)",
                period: "2025 — 2027",
            },
            Education {
                title: "B.Eng — Computer Science (BUT Informatique)",
                school: "IUT Nord Franche-Comté",
                period: "2022 — 2025",
            },
        ],
    },
    projects: ProjectsBlock {
        title: "Highlighted projects",
        filter_all: "All",
        filter_academic: "Academic",
        filter_personal: "Personal",
        link_label: "View project",
        items: &[
            Project {
                title: "SentiMarket",
                subtitle: "Market sentiment analytics platform",
                description: &[
                    "Aggregates economic data and financial news sources.",
                    "Correlates breaking news with stock prices using FinBERT.",
                ],
                technologies: &["Vue.js", "Node.js", "Python", "FinBERT", "Financial APIs"],
                category: ProjectCategory::Personal,
                link: Some("https://github.com/chevalierthomas/SentiMarket"),
                year: Some("2025"),
            },
            Project {
                title: "Olympic Games — Opening Ceremony",
                subtitle: "Interactive showcase application",
                description: &[
                    "Immersive experience built around official data storytelling.",
                    "Agile collaboration with continuous integration and Node.js APIs.",
                ],
                technologies: &["Vue.js", "Node.js", "Axios", "GitHub", "Agile"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2023"),
            },
            Project {
                title: "Running insights app",
                subtitle: "Biometric data analytics",
                description: &[
                    "Data preparation and prediction pipeline for race times.",
                    "REST API to serve analytical insights.",
                ],
                technologies: &["Python", "Pandas", "Scikit-learn", "REST API"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2024"),
            },
            Project {
                title: "Climbing shoes e-commerce iOS app",
                subtitle: "Specialised shopping experience for climbers",
                description: &[
                    "Full mobile journey to explore and buy specialised climbing shoes.",
                    "REST API catalogue with stock management and customer reviews.",
                    "Polished SwiftUI interface with secure checkout and offline support.",
                ],
                technologies: &["Swift", "SwiftUI", "REST API", "Firebase"],
                category: ProjectCategory::Academic,
                link: None,
                year: Some("2024"),
            },
        ],
    },
    languages: LanguagesBlock {
        title: "Languages",
        items: &[
            LanguageLevel {
                label: "French",
                level: "Native",
            },
            LanguageLevel {
                label: "English",
                level: "Advanced",
            },
        ],
    },
    interests: InterestsBlock {
        title: "Interests",
        items: &[
            "Photography",
            "Travelling and world discovery",
            "Economics",
            "Music",
            "DIY & tinkering (electronics, coding, making)",
            "Understanding the world through media and technology",
        ],
    },
    contact: Contact {
        title: "Let’s connect",
        subtitle: "Open to opportunities in AI, data science or web development. I would love to hear about your ideas.",
        email_label: "Email me",
        social_label: "Follow me",
    },
};
