//! Label-selection policy: the one rule used to summarize a record as a
//! human-readable string in table cells, suggestion lists and edit prefill.

use serde_json::Value;

use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::item::Item;
use crate::naming;

/// Placeholder for a missing record or an empty cell.
pub const ABSENT: &str = "—";

const CODE_KEYS: [&str; 4] = ["placa", "codigo", "numero", "nro_ticket"];

/// Human-readable summary of `item`.
///
/// Precedence: vehicle/driver pair, plate or code-like field, person name,
/// company legal name, `tipo-numero` composite, `ID: <id>`, and an em dash
/// when there is no record at all.
pub fn display_label(item: Option<&Item>) -> String {
    let Some(item) = item else {
        return ABSENT.to_string();
    };

    if let Some(pair) = vehicle_driver_pair(item) {
        return pair;
    }

    if let Some(code) = CODE_KEYS.iter().find_map(|key| item.text(key)) {
        return code;
    }

    if let Some(first) = item.text("nombre") {
        return match item.text("apellido") {
            Some(last) => format!("{first} {last}"),
            None => first,
        };
    }

    if let Some(company) = item.text("razon_social") {
        return company;
    }

    if let (Some(kind), Some(number)) = (item.text("tipo"), item.text("numero")) {
        return format!("{kind}-{number}");
    }

    match item.id() {
        Some(id) => format!("ID: {id}"),
        None => ABSENT.to_string(),
    }
}

/// `placa / nombre` for assignment-like records that carry a driver and a
/// vehicle (either embedded or as the record's own plate).
fn vehicle_driver_pair(item: &Item) -> Option<String> {
    let driver = item.object("chofer")?;
    let vehicle = item.object("vehiculo");
    let plate = match &vehicle {
        Some(vehicle) => vehicle.text("placa").unwrap_or_default(),
        None => item.text("placa")?,
    };
    let name = match driver.object("persona") {
        Some(person) => person.text("nombre").unwrap_or_default(),
        None => "Chofer".to_string(),
    };
    Some(format!("{plate} / {name}"))
}

/// Text of one table cell for `field` in `item`.
pub fn cell_text(item: &Item, field: &FieldDescriptor) -> String {
    if field.is_foreign_key() {
        let related = item.object(naming::relation_key(&field.name));
        if related.is_some() {
            return display_label(related.as_ref());
        }
        return item.text(&field.name).unwrap_or_else(|| ABSENT.to_string());
    }

    let value = item.get(&field.name);
    if field.field_type == FieldType::Checkbox {
        let checked = matches!(value, Some(Value::Bool(true)));
        return if checked { "Sí" } else { "No" }.to_string();
    }

    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "Sí".to_string(),
        Some(Value::Object(map)) => display_label(Some(&Item::from(map.clone()))),
        _ => ABSENT.to_string(),
    }
}

/// Label shown in a foreign-key filter box when an existing record is edited.
pub fn prefill_label(item: &Item, field: &FieldDescriptor) -> String {
    item.object(naming::relation_key(&field.name))
        .map(|related| display_label(Some(&related)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        Item::try_from(value).expect("object")
    }

    #[test]
    fn plate_and_driver_render_as_a_pair() {
        let it = item(json!({"placa": "ABC123", "chofer": {"persona": {"nombre": "Juan"}}}));
        assert_eq!(display_label(Some(&it)), "ABC123 / Juan");

        let assignment = item(json!({
            "id": 3,
            "vehiculo": {"placa": "XYZ9"},
            "chofer": {"id": 4}
        }));
        assert_eq!(display_label(Some(&assignment)), "XYZ9 / Chofer");
    }

    #[test]
    fn precedence_follows_the_policy() {
        assert_eq!(display_label(Some(&item(json!({"codigo": "P-1", "nombre": "Maíz"})))), "P-1");
        assert_eq!(display_label(Some(&item(json!({"nro_ticket": 42})))), "42");
        assert_eq!(
            display_label(Some(&item(json!({"nombre": "Ana", "apellido": "Pérez"})))),
            "Ana Pérez"
        );
        assert_eq!(display_label(Some(&item(json!({"nombre": "Ana"})))), "Ana");
        assert_eq!(
            display_label(Some(&item(json!({"razon_social": "Transportes C.A."})))),
            "Transportes C.A."
        );
        assert_eq!(display_label(Some(&item(json!({"id": 9, "capacidad": 0})))), "ID: 9");
        assert_eq!(display_label(Some(&item(json!({})))), ABSENT);
        assert_eq!(display_label(None), ABSENT);
    }

    #[test]
    fn label_is_identical_in_cell_option_and_prefill() {
        let vehicle = json!({"id": 2, "placa": "ABC123", "chofer": {"persona": {"nombre": "Juan"}}});
        let row = item(json!({"id": 10, "id_vehiculo": 2, "vehiculo": vehicle.clone()}));
        let field = FieldDescriptor::text("id_vehiculo", "Vehículo");
        let option = display_label(Some(&item(vehicle)));

        assert_eq!(option, "ABC123 / Juan");
        assert_eq!(cell_text(&row, &field), option);
        assert_eq!(prefill_label(&row, &field), option);
    }

    #[test]
    fn cells_fall_back_to_raw_values() {
        let row = item(json!({"id": 1, "id_granja": 5, "activo": false, "nota": ""}));
        assert_eq!(cell_text(&row, &FieldDescriptor::text("id_granja", "Granja")), "5");
        assert_eq!(cell_text(&row, &FieldDescriptor::checkbox("activo", "Activo")), "No");
        assert_eq!(cell_text(&row, &FieldDescriptor::text("nota", "Nota")), ABSENT);
    }
}
