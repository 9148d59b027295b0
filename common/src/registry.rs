//! Registry of resource descriptors.
//!
//! The registry is an explicit value: screens receive it at setup and the
//! nested-modal machinery looks related resources up in it. Tests build
//! their own registries with only the entries they need.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::error::{DescriptorError, HookError};
use crate::hooks::ResourceHooks;
use crate::model::field::FieldDescriptor as F;
use crate::model::item::{Item, Payload};
use crate::model::permissions::RowPermissions;
use crate::model::resource::ResourceDescriptor;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRegistry {
    entries: BTreeMap<String, Rc<ResourceDescriptor>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: ResourceDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    pub fn insert(&mut self, descriptor: ResourceDescriptor) {
        self.entries
            .insert(descriptor.resource.clone(), Rc::new(descriptor));
    }

    pub fn get(&self, resource: &str) -> Option<Rc<ResourceDescriptor>> {
        self.entries.get(resource).cloned()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.entries.contains_key(resource)
    }

    /// Validates every descriptor and checks that each foreign key points at
    /// a registered resource.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        for descriptor in self.entries.values() {
            descriptor.validate()?;
            for related in descriptor.fields.iter().filter_map(F::related_resource) {
                if !self.contains(&related) {
                    return Err(DescriptorError::UnknownResource(related));
                }
            }
        }
        Ok(())
    }

    /// Resource screens of the Aviges weighing and transport operation.
    pub fn aviges() -> Self {
        Self::new()
            .with(ResourceDescriptor::new(
                "Gestión de Direcciones",
                "direcciones",
                vec![
                    F::text("pais", "País").default_value("Venezuela"),
                    F::text("estado", "Estado").required(),
                    F::text("municipio", "Municipio").required(),
                    F::text("sector", "Sector").required(),
                    F::text("descripcion", "Punto de Referencia"),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Personas",
                "personas",
                vec![
                    F::select("tipo_cedula", "Tipo de Cédula", "cedula_tipo").required(),
                    F::text("cedula", "Número de Cédula").required(),
                    F::text("nombre", "Nombre").required(),
                    F::text("apellido", "Apellido").required(),
                    F::text("id_direcciones", "Dirección").required(),
                    F::text("id_telefono", "Teléfono Principal"),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Crear Teléfono",
                "telefonos",
                vec![
                    F::text("numero", "Número Telefónico").required(),
                    F::text("operadora", "Operadora").default_value("Desconocida"),
                    F::select("tipo", "Tipo", "telefonos_tipo").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Crear RIF",
                "rif",
                vec![
                    F::select("tipo", "Tipo de RIF", "rif_tipo").required(),
                    F::text("numero", "Número de RIF").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Roles",
                "roles",
                vec![F::text("nombre", "Nombre del Rol").required()],
            ))
            .with(ResourceDescriptor::new(
                "Ubicaciones (Orígenes/Destinos)",
                "ubicaciones",
                vec![
                    F::text("nombre", "Nombre del Sitio").required(),
                    F::select("tipo", "Tipo de Ubicación", "ubicaciones_tipo").required(),
                    F::text("id_direcciones", "Dirección Física").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Usuarios",
                "usuarios",
                vec![
                    F::text("usuario", "Usuario (Login)").required(),
                    F::password("contrasena", "Contraseña").required(),
                    F::text("id_roles", "Rol Asignado").required(),
                    F::text("id_personas", "Datos Personales").required(),
                ],
            ).hooks(UserHooks))
            .with(ResourceDescriptor::new(
                "Empresas de Transporte",
                "empresas_transporte",
                vec![
                    F::text("nombre", "Razón Social").required(),
                    F::text("id_direcciones", "Dirección Fiscal").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Granjas",
                "granjas",
                vec![
                    F::text("id_ubicaciones", "Ubicación Asociada").required(),
                    F::text("id_persona_responsable", "Persona Responsable").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Vehículos",
                "vehiculos",
                vec![
                    F::text("placa", "Placa del Vehículo").required(),
                    F::text("id_empresas_transportes", "Empresa de Transporte").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Gestión de Choferes",
                "choferes",
                vec![
                    F::text("id_empresas_transportes", "Empresa de Transporte").required(),
                    F::text("id_personas", "Datos Personales").required(),
                ],
            ))
            .with(
                ResourceDescriptor::new(
                    "Gestión de Productos",
                    "productos",
                    vec![
                        F::text("codigo", "Código").read_only(),
                        F::text("nombre", "Nombre del Producto").required(),
                    ],
                )
                .hooks(ProductHooks),
            )
            .with(ResourceDescriptor::new(
                "Gestión de Galpones",
                "galpones",
                vec![
                    F::text("id_granja", "Granja").required(),
                    F::number("nro_galpon", "Número de Galpón").required(),
                    F::number("capacidad", "Capacidad de Aves").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Lotes de Aves",
                "lotes",
                vec![
                    F::text("codigo_lote", "Código Lote").required(),
                    F::text("id_galpones", "Galpón").required(),
                    F::date("fecha_alojamiento", "Fecha Alojamiento").required(),
                    F::number("cantidad_aves", "Cantidad Inicial").required(),
                ],
            ))
            .with(ResourceDescriptor::new(
                "Asignación Chofer-Vehículo",
                "asignaciones",
                vec![
                    F::text("id_vehiculos", "Vehículo (Placa)").required(),
                    F::text("id_chofer", "Chofer").required(),
                    F::date("fecha", "Fecha Inicio").required(),
                    F::time("hora", "Hora Inicio").required(),
                    F::checkbox("active", "Activo").default_value("true"),
                ],
            ))
            .with(
                ResourceDescriptor::new(
                    "Tickets de Pesaje (Histórico)",
                    "tickets_pesaje",
                    vec![
                        F::text("nro_ticket", "Nro Ticket").read_only(),
                        F::select("tipo", "Tipo Operación", "tickets_tipo").required(),
                        F::text("id_asignaciones", "Asignación (Veh/Chofer)"),
                        F::text("id_producto", "Producto"),
                        F::text("id_origen", "Origen (Granja/Prov)"),
                        F::text("id_destino", "Destino (Matadero/Cli)"),
                        F::number("peso_bruto", "Bruto (kg)").read_only(),
                        F::number("peso_tara", "Tara (kg)").read_only(),
                        F::number("peso_neto", "Neto (kg)").read_only(),
                        F::select("estado", "Estado", "tickets_estado").read_only(),
                        F::text("created_at", "Fecha Registro").read_only(),
                    ],
                )
                .hooks(TicketHooks),
            )
    }
}

/// Product codes are generated by the backend; a placeholder is sent so the
/// create request passes validation.
pub struct ProductHooks;

pub const PLACEHOLDER_PRODUCT_CODE: &str = "TEMP";

impl ResourceHooks for ProductHooks {
    fn before_create(&self, payload: &mut Payload) -> Result<(), HookError> {
        let has_code = matches!(payload.get("codigo"), Some(Value::String(s)) if !s.is_empty());
        if !has_code {
            payload.insert("codigo", Value::String(PLACEHOLDER_PRODUCT_CODE.to_string()));
        }
        Ok(())
    }
}

/// A finalized ticket can no longer be edited or deleted.
pub struct TicketHooks;

pub const TICKET_FINALIZED: &str = "Finalizado";

impl ResourceHooks for TicketHooks {
    fn row_permissions(&self, item: &Item, screen: RowPermissions) -> RowPermissions {
        if item.text("estado").as_deref() == Some(TICKET_FINALIZED) {
            RowPermissions::default()
        } else {
            screen
        }
    }
}

/// An empty password on edit keeps the stored one.
pub struct UserHooks;

impl ResourceHooks for UserHooks {
    fn before_update(&self, payload: &mut Payload, _id: i64) -> Result<(), HookError> {
        if matches!(payload.get("contrasena"), Some(Value::String(s)) if s.is_empty()) {
            payload.remove("contrasena");
        }
        Ok(())
    }

    fn before_create(&self, payload: &mut Payload) -> Result<(), HookError> {
        match payload.get("contrasena") {
            Some(Value::String(s)) if s.len() >= 6 => Ok(()),
            _ => Err(HookError::new(
                "La contraseña debe tener al menos 6 caracteres",
            )),
        }
    }
}
