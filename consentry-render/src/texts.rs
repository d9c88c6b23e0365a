//! Locale text bundles.
//!
//! Bundles are keyed by the primary language subtag; anything without a
//! bundle renders in English.

/// All user-visible strings of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBundle {
    pub title: &'static str,
    pub description: &'static str,
    pub necessary: &'static str,
    pub preferences: &'static str,
    pub statistics: &'static str,
    pub marketing: &'static str,
    pub accept: &'static str,
    pub decline: &'static str,
    pub save_preferences: &'static str,
    pub customize: &'static str,
    pub do_not_sell: &'static str,
    pub affiliate_header: &'static str,
    pub learn_more: &'static str,
    pub insights_header: &'static str,
    pub sponsored: &'static str,
}

pub const EN: TextBundle = TextBundle {
    title: "We value your privacy",
    description: "We use cookies to enhance your browsing experience, serve personalized ads or content, and analyze our traffic. By clicking \"Accept All\", you consent to our use of cookies.",
    necessary: "Necessary",
    preferences: "Preferences",
    statistics: "Statistics",
    marketing: "Marketing",
    accept: "Accept All",
    decline: "Decline",
    save_preferences: "Save Preferences",
    customize: "Customize >",
    do_not_sell: "Do Not Sell My Personal Information",
    affiliate_header: "Recommended for you",
    learn_more: "Learn More",
    insights_header: "Privacy insights",
    sponsored: "Sponsored",
};

pub const ES: TextBundle = TextBundle {
    title: "Valoramos tu privacidad",
    description: "Utilizamos cookies para mejorar tu experiencia de navegación, servir anuncios o contenido personalizado y analizar nuestro tráfico.",
    necessary: "Necesarias",
    preferences: "Preferencias",
    statistics: "Estadísticas",
    marketing: "Marketing",
    accept: "Aceptar Todo",
    decline: "Rechazar",
    save_preferences: "Guardar Preferencias",
    customize: "Personalizar >",
    do_not_sell: "No Vender Mi Información Personal",
    affiliate_header: "Recomendado para ti",
    learn_more: "Saber Más",
    insights_header: "Información de privacidad",
    sponsored: "Patrocinado",
};

pub const FR: TextBundle = TextBundle {
    title: "Nous respectons votre vie privée",
    description: "Nous utilisons des cookies pour améliorer votre expérience de navigation, diffuser des publicités personnalisées et analyser notre trafic.",
    necessary: "Nécessaires",
    preferences: "Préférences",
    statistics: "Statistiques",
    marketing: "Marketing",
    accept: "Tout Accepter",
    decline: "Refuser",
    save_preferences: "Sauvegarder",
    customize: "Personnaliser >",
    do_not_sell: "Ne Pas Vendre Mes Informations",
    affiliate_header: "Recommandé pour vous",
    learn_more: "En Savoir Plus",
    insights_header: "Conseils de confidentialité",
    sponsored: "Sponsorisé",
};

/// Selects the bundle for a BCP 47 tag by its primary subtag.
#[must_use]
pub fn bundle_for(language: &str) -> &'static TextBundle {
    let primary = language.split('-').next().unwrap_or("en");
    match primary.to_ascii_lowercase().as_str() {
        "es" => &ES,
        "fr" => &FR,
        _ => &EN,
    }
}
