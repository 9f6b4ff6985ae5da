use super::Locale;

/// User-facing text for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    pub new_section: &'static str,
    pub new_description: &'static str,
    pub create_button: &'static str,
    pub capturing: &'static str,

    pub latest_section: &'static str,
    pub empty_state: &'static str,
    pub photo_label: &'static str,
    pub place_label: &'static str,
    pub coords_label: &'static str,
    pub datetime_label: &'static str,
    pub delete_button: &'static str,

    pub preferences_section: &'static str,
    pub device_label: &'static str,

    pub create_title: &'static str,
    pub create_message: &'static str,
    pub create_confirm: &'static str,
    pub delete_title: &'static str,
    pub delete_message: &'static str,
    pub delete_confirm: &'static str,
    pub cancel: &'static str,

    pub capture_failed_title: &'static str,
    pub camera_unavailable: &'static str,
    pub location_denied: &'static str,
    pub location_unavailable: &'static str,
    pub capture_busy: &'static str,
    pub action_failed_title: &'static str,

    pub hint_new: &'static str,
    pub hint_delete: &'static str,
    pub hint_locale: &'static str,
    pub hint_quit: &'static str,
}

const ES_AR: Strings = Strings {
    app_title: "WorldTag · Travel Micro-Journal",
    app_subtitle: "Cámara · Ubicación · Localization · Confirmaciones (Modal)",

    new_section: "Nuevo WorldTag",
    new_description:
        "Capturá una foto, se geoetiqueta automáticamente y se formatea según el locale elegido.",
    create_button: "Crear registro",
    capturing: "Capturando…",

    latest_section: "Último registro",
    empty_state: "Aún no hay registros. Creá el primero.",
    photo_label: "Foto",
    place_label: "Lugar",
    coords_label: "Coordenadas",
    datetime_label: "Fecha/Hora",
    delete_button: "Eliminar",

    preferences_section: "Preferencias regionales",
    device_label: "Dispositivo",

    create_title: "Crear registro",
    create_message: "Vamos a abrir la cámara y capturar tu WorldTag con ubicación actual.",
    create_confirm: "Crear",
    delete_title: "Eliminar registro",
    delete_message: "¿Querés eliminar el último WorldTag? Esta acción no se puede deshacer.",
    delete_confirm: "Eliminar",
    cancel: "Cancelar",

    capture_failed_title: "No se pudo crear el registro",
    camera_unavailable: "Necesitamos permiso de cámara.",
    location_denied: "Necesitamos permiso de ubicación.",
    location_unavailable: "No pudimos obtener tu ubicación.",
    capture_busy: "Ya hay una captura en curso.",
    action_failed_title: "La acción falló",

    hint_new: "nuevo",
    hint_delete: "eliminar",
    hint_locale: "idioma",
    hint_quit: "salir",
};

const EN_US: Strings = Strings {
    app_title: "WorldTag · Travel Micro-Journal",
    app_subtitle: "Camera · Location · Localization · Confirmations (Modal)",

    new_section: "New WorldTag",
    new_description:
        "Take a photo; it is geotagged automatically and formatted for the selected locale.",
    create_button: "Create entry",
    capturing: "Capturing…",

    latest_section: "Latest entry",
    empty_state: "No entries yet. Create the first one.",
    photo_label: "Photo",
    place_label: "Place",
    coords_label: "Coordinates",
    datetime_label: "Date/Time",
    delete_button: "Delete",

    preferences_section: "Regional preferences",
    device_label: "Device",

    create_title: "Create entry",
    create_message: "We'll open the camera and capture your WorldTag with your current location.",
    create_confirm: "Create",
    delete_title: "Delete entry",
    delete_message: "Delete the latest WorldTag? This action cannot be undone.",
    delete_confirm: "Delete",
    cancel: "Cancel",

    capture_failed_title: "Could not create the entry",
    camera_unavailable: "We need camera access.",
    location_denied: "We need location permission.",
    location_unavailable: "We couldn't get your location.",
    capture_busy: "A capture is already in progress.",
    action_failed_title: "Action failed",

    hint_new: "new",
    hint_delete: "delete",
    hint_locale: "language",
    hint_quit: "quit",
};

const PT_BR: Strings = Strings {
    app_title: "WorldTag · Travel Micro-Journal",
    app_subtitle: "Câmera · Localização · Localization · Confirmações (Modal)",

    new_section: "Novo WorldTag",
    new_description:
        "Tire uma foto; ela é geomarcada automaticamente e formatada conforme o locale escolhido.",
    create_button: "Criar registro",
    capturing: "Capturando…",

    latest_section: "Último registro",
    empty_state: "Ainda não há registros. Crie o primeiro.",
    photo_label: "Foto",
    place_label: "Lugar",
    coords_label: "Coordenadas",
    datetime_label: "Data/Hora",
    delete_button: "Excluir",

    preferences_section: "Preferências regionais",
    device_label: "Dispositivo",

    create_title: "Criar registro",
    create_message: "Vamos abrir a câmera e capturar seu WorldTag com a localização atual.",
    create_confirm: "Criar",
    delete_title: "Excluir registro",
    delete_message: "Deseja excluir o último WorldTag? Esta ação não pode ser desfeita.",
    delete_confirm: "Excluir",
    cancel: "Cancelar",

    capture_failed_title: "Não foi possível criar o registro",
    camera_unavailable: "Precisamos de permissão da câmera.",
    location_denied: "Precisamos de permissão de localização.",
    location_unavailable: "Não conseguimos obter sua localização.",
    capture_busy: "Já há uma captura em andamento.",
    action_failed_title: "A ação falhou",

    hint_new: "novo",
    hint_delete: "excluir",
    hint_locale: "idioma",
    hint_quit: "sair",
};

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::EsAr => &ES_AR,
            Locale::EnUs => &EN_US,
            Locale::PtBr => &PT_BR,
        }
    }
}
