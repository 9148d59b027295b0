//! Foreign-key naming convention.
//!
//! A field named `id_<relation>` references another resource. The embedded
//! related record, when the backend includes it, sits under `<relation>`,
//! and the REST collection is resolved through a fixed alias table with a
//! plural `s` as fallback.

pub const FOREIGN_KEY_PREFIX: &str = "id_";

const RESOURCE_ALIASES: &[(&str, &str)] = &[
    ("granja", "granjas"),
    ("empresas_transportes", "empresas_transporte"),
    ("galpon", "galpones"),
    ("galpones", "galpones"),
    ("ticket_pesaje", "tickets_pesaje"),
    ("usuario", "usuarios"),
    ("producto", "productos"),
    ("vehiculo", "vehiculos"),
    ("vehiculos", "vehiculos"),
    ("chofer", "choferes"),
    ("rol", "roles"),
    ("roles", "roles"),
    ("direccion", "direcciones"),
    ("direcciones", "direcciones"),
    ("persona", "personas"),
    ("personas", "personas"),
    ("persona_responsable", "personas"),
    ("asignaciones", "asignaciones"),
    ("ubicaciones", "ubicaciones"),
    ("origen", "ubicaciones"),
    ("destino", "ubicaciones"),
    ("lote", "lotes"),
    ("rif", "rif"),
];

pub fn is_foreign_key(field_name: &str) -> bool {
    field_name.starts_with(FOREIGN_KEY_PREFIX)
}

/// Key under which the backend embeds the related record (`id_chofer` -> `chofer`).
pub fn relation_key(field_name: &str) -> &str {
    field_name
        .strip_prefix(FOREIGN_KEY_PREFIX)
        .unwrap_or(field_name)
}

/// REST collection referenced by a foreign-key field.
pub fn related_resource_name(field_name: &str) -> String {
    let singular = relation_key(field_name);
    RESOURCE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == singular)
        .map(|(_, resource)| resource.to_string())
        .unwrap_or_else(|| format!("{singular}s"))
}
