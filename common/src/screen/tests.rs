use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use super::*;
use crate::error::ApiError;
use crate::form::FieldState;
use crate::hooks::ResourceHooks;
use crate::model::enums::EnumGroups;
use crate::model::field::FieldDescriptor;
use crate::model::item::{Item, ItemId, ListPage, Payload};
use crate::model::resource::ResourceDescriptor;
use crate::model::permissions::PermissionDescriptor;
use crate::registry::ResourceRegistry;

fn item(value: Value) -> Item {
    Item::try_from(value).expect("object")
}

fn page(items: Vec<Value>, total_pages: u32) -> ListPage {
    ListPage {
        items: items.into_iter().map(item).collect(),
        total_pages,
    }
}

fn mount(resource: &str, permissions: PermissionDescriptor) -> (CrudScreen, Vec<Effect>) {
    let registry = Rc::new(ResourceRegistry::aviges());
    let descriptor = registry.get(resource).expect("registered resource");
    CrudPage::new(descriptor).setup(permissions, registry)
}

/// Answers the pending list request with `list`.
fn load(screen: &mut CrudScreen, effects: &[Effect], list: ListPage) {
    let Some(Effect::FetchList {
        page, generation, ..
    }) = effects
        .iter()
        .find(|e| matches!(e, Effect::FetchList { .. }))
    else {
        panic!("no list request in {effects:?}");
    };
    let out = screen.update(Msg::ListLoaded {
        generation: *generation,
        page: *page,
        result: Ok(list),
    });
    assert!(out.is_empty());
}

fn input(screen: &mut CrudScreen, level: u32, field: &str, value: &str) {
    screen.update(Msg::Input {
        level: ModalLevel(level),
        field: field.into(),
        value: value.into(),
    });
}

fn field_state(screen: &CrudScreen, name: &str) -> Option<FieldState> {
    screen.main_modal().form.field(name).map(|field| field.state.clone())
}

fn created_target(effects: &[Effect]) -> ModalTarget {
    match effects {
        [Effect::Create { target, .. }] => *target,
        other => panic!("expected a single create, got {other:?}"),
    }
}

#[test]
fn no_access_issues_no_requests() {
    let (mut screen, effects) = mount("usuarios", PermissionDescriptor::no_access());
    assert!(effects.is_empty());
    assert!(screen.is_denied());
    assert_eq!(screen.error(), Some(ACCESS_DENIED_MESSAGE));
    assert!(!screen.can_create());

    assert!(screen.update(Msg::GoToPage(2)).is_empty());
    assert!(screen.update(Msg::OpenCreate).is_empty());
    assert!(!screen.main_modal().open);
}

#[test]
fn setup_requests_list_related_and_enums() {
    let (_, effects) = mount("asignaciones", PermissionDescriptor::default());
    assert_eq!(
        effects,
        vec![
            Effect::FetchList {
                resource: "asignaciones".into(),
                page: 1,
                page_size: 50,
                generation: 1,
            },
            Effect::FetchRelated {
                target: ModalTarget::ROOT,
                field: "id_vehiculos".into(),
                resource: "vehiculos".into(),
                page_size: RELATED_PAGE_SIZE,
            },
            Effect::FetchRelated {
                target: ModalTarget::ROOT,
                field: "id_chofer".into(),
                resource: "choferes".into(),
                page_size: RELATED_PAGE_SIZE,
            },
            Effect::FetchEnums {
                target: ModalTarget::ROOT
            },
        ]
    );
}

#[test]
fn read_only_overrides_every_flag() {
    let permissions = PermissionDescriptor {
        can_create: true,
        can_edit: true,
        can_delete: true,
        ..PermissionDescriptor::read_only()
    };
    let (mut screen, effects) = mount("tickets_pesaje", permissions);
    load(
        &mut screen,
        &effects,
        page(vec![json!({"id": 1, "nro_ticket": "T-1", "estado": "En Proceso"})], 1),
    );

    assert!(!screen.can_create());
    let row = screen.row_permissions(&screen.table().items[0]);
    assert!(!row.can_edit && !row.can_delete);

    assert!(screen.update(Msg::OpenCreate).is_empty());
    assert!(!screen.main_modal().open);
    screen.update(Msg::Edit(1));
    assert!(!screen.main_modal().open);
    assert!(screen.update(Msg::Delete(1)).is_empty());
}

#[test]
fn finalized_ticket_rows_have_no_controls() {
    let (mut screen, effects) = mount("tickets_pesaje", PermissionDescriptor::default());
    load(
        &mut screen,
        &effects,
        page(
            vec![
                json!({"id": 1, "estado": "Finalizado"}),
                json!({"id": 2, "estado": "En Proceso"}),
            ],
            1,
        ),
    );

    assert!(screen.update(Msg::Delete(1)).is_empty());
    assert_eq!(
        screen.update(Msg::Delete(2)),
        vec![Effect::ConfirmDelete { id: 2 }]
    );
}

#[test]
fn foreign_key_text_resolves_by_exact_label() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::RelatedLoaded {
        target: ModalTarget::ROOT,
        field: "id_personas".into(),
        resource: "personas".into(),
        result: Ok(page(
            vec![
                json!({"id": 7, "nombre": "Juan", "apellido": "Pérez"}),
                json!({"id": 8, "nombre": "Ana"}),
            ],
            1,
        )),
    });
    assert_eq!(screen.related_cache().get("personas").map(<[_]>::len), Some(2));

    screen.update(Msg::OpenCreate);
    let type_text = |screen: &mut CrudScreen, text: &str| {
        screen.update(Msg::ForeignKeyInput {
            level: ModalLevel::ROOT,
            field: "id_personas".into(),
            text: text.into(),
        });
        screen.main_modal().form.foreign_key("id_personas").and_then(|fk| fk.id)
    };

    assert_eq!(type_text(&mut screen, "Juan Pérez"), Some(7));
    assert_eq!(type_text(&mut screen, "Ana"), Some(8));
    assert_eq!(type_text(&mut screen, "Juan"), None);
}

#[test]
fn related_and_enum_failures_are_not_screen_errors() {
    let (mut screen, _) = mount("personas", PermissionDescriptor::default());
    screen.update(Msg::RelatedLoaded {
        target: ModalTarget::ROOT,
        field: "id_direcciones".into(),
        resource: "direcciones".into(),
        result: Err(ApiError::Transport("timeout".into())),
    });
    screen.update(Msg::EnumsLoaded {
        target: ModalTarget::ROOT,
        result: Err(ApiError::Transport("timeout".into())),
    });
    assert_eq!(screen.error(), None);
    assert!(screen.enums().is_none());
}

#[test]
fn nested_modals_stack_and_cancel_independently() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);

    let level1 = screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    assert!(level1.iter().any(|e| matches!(
        e,
        Effect::FetchRelated { resource, .. } if resource == "direcciones"
    )));
    assert!(level1.iter().any(|e| matches!(e, Effect::FetchEnums { .. })));

    let level2 = screen.update(Msg::OpenRelated {
        origin: ModalLevel(1),
        field: "id_direcciones".into(),
    });
    assert!(level2.is_empty());

    let stack = screen.modal_stack();
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.get(ModalLevel(1)).map(|m| m.title()), Some("Gestión de Personas"));
    assert_eq!(stack.get(ModalLevel(2)).map(|m| m.title()), Some("Gestión de Direcciones"));
    assert!(ModalLevel(2).z_index() > ModalLevel(1).z_index());
    assert!(ModalLevel(1).z_index() > ModalLevel::ROOT.z_index());

    screen.update(Msg::Cancel(ModalLevel(2)));
    assert!(screen.main_modal().open);
    assert!(screen.modal_stack().get(ModalLevel(1)).is_some());
    assert!(screen.modal_stack().get(ModalLevel(2)).is_none());
}

#[test]
fn nested_create_feeds_the_originating_field() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    input(&mut screen, 1, "nombre", "María");
    input(&mut screen, 1, "apellido", "Gil");

    let effects = screen.update(Msg::Submit(ModalLevel(1)));
    let target = created_target(&effects);
    assert!(screen.modal_stack().get(ModalLevel(1)).is_some_and(|m| m.is_submitting()));
    assert!(screen.update(Msg::Submit(ModalLevel(1))).is_empty());

    screen.update(Msg::Created {
        target,
        resource: "personas".into(),
        result: Ok(item(json!({"id": 31, "nombre": "María", "apellido": "Gil"}))),
    });

    assert!(screen.modal_stack().is_empty());
    let fk = screen.main_modal().form.foreign_key("id_personas").expect("fk");
    assert_eq!(fk.id, Some(31));
    assert_eq!(fk.text, "María Gil");
    assert!(fk.suggestions.iter().any(|s| s.id == 31));
    assert_eq!(screen.related_cache().get("personas").map(<[_]>::len), Some(1));
}

#[test]
fn nested_create_failure_keeps_the_modal_open() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    let target = created_target(&screen.update(Msg::Submit(ModalLevel(1))));
    screen.update(Msg::Created {
        target,
        resource: "personas".into(),
        result: Err(ApiError::from_response(400, r#"{"error": "cédula duplicada"}"#)),
    });

    let modal = screen.modal_stack().get(ModalLevel(1)).expect("still open");
    assert_eq!(modal.error.as_deref(), Some("cédula duplicada"));
    assert!(!modal.is_submitting());
    assert_eq!(
        screen.main_modal().form.foreign_key("id_personas").and_then(|fk| fk.id),
        None
    );
}

#[test]
fn response_for_a_cancelled_modal_only_reaches_the_cache() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    let target = created_target(&screen.update(Msg::Submit(ModalLevel(1))));
    screen.update(Msg::Cancel(ModalLevel(1)));
    screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });

    screen.update(Msg::Created {
        target,
        resource: "personas".into(),
        result: Ok(item(json!({"id": 40, "nombre": "Luis"}))),
    });

    assert_eq!(screen.modal_stack().len(), 1);
    assert_eq!(
        screen.main_modal().form.foreign_key("id_personas").and_then(|fk| fk.id),
        None
    );
    assert_eq!(screen.related_cache().get("personas").map(<[_]>::len), Some(1));
}

#[test]
fn unregistered_related_resource_alerts_without_a_modal() {
    let registry = Rc::new(ResourceRegistry::new().with(
        crate::model::resource::ResourceDescriptor::new(
            "Vehículos",
            "vehiculos",
            vec![crate::model::field::FieldDescriptor::text(
                "id_empresas_transportes",
                "Empresa",
            )],
        ),
    ));
    let descriptor = registry.get("vehiculos").expect("registered");
    let (mut screen, _) = CrudPage::new(descriptor).setup(PermissionDescriptor::default(), registry);
    screen.update(Msg::OpenCreate);

    let effects = screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_empresas_transportes".into(),
    });
    assert_eq!(
        effects,
        vec![Effect::Alert("No hay configuración para empresas_transporte".into())]
    );
    assert!(screen.modal_stack().is_empty());
}

#[test]
fn nested_selects_reuse_cached_enums() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    let mut groups = EnumGroups::default();
    groups.insert("cedula_tipo", vec!["V".into(), "E".into()]);
    screen.update(Msg::EnumsLoaded {
        target: ModalTarget::ROOT,
        result: Ok(groups),
    });
    screen.update(Msg::OpenCreate);

    let effects = screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    assert!(!effects.iter().any(|e| matches!(e, Effect::FetchEnums { .. })));
    let modal = screen.modal_stack().get(ModalLevel(1)).expect("open");
    assert_eq!(
        modal.form.field("tipo_cedula").map(|f| &f.state),
        Some(&crate::form::FieldState::Select {
            value: String::new(),
            options: Some(vec!["V".into(), "E".into()]),
        })
    );
}

fn operator_edit() -> PermissionDescriptor {
    PermissionDescriptor {
        can_delete: false,
        requires_admin_for_edit: true,
        ..PermissionDescriptor::default()
    }
}

#[test]
fn declined_admin_challenge_aborts_the_update() {
    let (mut screen, effects) = mount("granjas", operator_edit());
    load(&mut screen, &effects, page(vec![json!({"id": 3})], 1));

    screen.update(Msg::Edit(3));
    assert_eq!(screen.update(Msg::Submit(ModalLevel::ROOT)), vec![Effect::ChallengeAdmin]);
    assert!(screen.main_modal().is_busy());

    assert!(screen.update(Msg::AdminChallengeResolved(false)).is_empty());
    assert!(screen.main_modal().open);
    assert!(!screen.main_modal().is_busy());
    assert_eq!(screen.main_modal().error.as_deref(), Some(ADMIN_REQUIRED_MESSAGE));
}

#[test]
fn validated_admin_challenge_sends_the_update() {
    let (mut screen, effects) = mount("granjas", operator_edit());
    load(
        &mut screen,
        &effects,
        page(vec![json!({"id": 3, "id_ubicaciones": 4, "id_persona_responsable": 9})], 1),
    );

    screen.update(Msg::Edit(3));
    screen.update(Msg::Submit(ModalLevel::ROOT));
    let effects = screen.update(Msg::AdminChallengeResolved(true));
    let mut expected = Payload::default();
    expected.insert("id_ubicaciones", json!(4));
    expected.insert("id_persona_responsable", json!(9));
    assert_eq!(
        effects,
        vec![Effect::Update {
            resource: "granjas".into(),
            id: 3,
            payload: expected,
        }]
    );

    let effects = screen.update(Msg::Updated { id: 3, result: Ok(()) });
    assert!(matches!(effects.as_slice(), [Effect::FetchList { page: 1, .. }]));
    assert!(!screen.main_modal().open);
}

#[test]
fn pagination_disables_the_current_page() {
    let (mut screen, _) = mount("lotes", PermissionDescriptor::default());
    let effects = screen.update(Msg::GoToPage(2));
    load(&mut screen, &effects, page(vec![json!({"id": 51})], 3));

    let controls = screen.pagination();
    assert_eq!(controls.len(), 3);
    assert_eq!(
        controls.iter().map(|c| c.disabled).collect::<Vec<_>>(),
        vec![false, true, false]
    );
}

#[test]
fn stale_list_responses_are_dropped() {
    let (mut screen, first) = mount("lotes", PermissionDescriptor::default());
    let second = screen.update(Msg::GoToPage(2));

    load(&mut screen, &second, page(vec![json!({"id": 2})], 2));
    load(&mut screen, &first, page(vec![json!({"id": 1})], 2));

    assert_eq!(screen.table().page, 2);
    assert_eq!(screen.table().items[0].id(), Some(2));
}

#[test]
fn list_failure_keeps_rendered_rows() {
    let (mut screen, effects) = mount("lotes", PermissionDescriptor::default());
    load(&mut screen, &effects, page(vec![json!({"id": 1})], 1));

    let Some(Effect::FetchList { generation, .. }) = screen.update(Msg::GoToPage(1)).pop() else {
        panic!("reload expected");
    };
    screen.update(Msg::ListLoaded {
        generation,
        page: 1,
        result: Err(ApiError::Transport("sin red".into())),
    });
    assert_eq!(screen.error(), Some("Error de conexión: sin red"));
    assert_eq!(screen.table().items.len(), 1);
}

#[test]
fn failed_delete_reports_and_keeps_the_table() {
    let (mut screen, effects) = mount("lotes", PermissionDescriptor::default());
    load(&mut screen, &effects, page(vec![json!({"id": 1})], 1));

    assert_eq!(screen.update(Msg::Delete(1)), vec![Effect::ConfirmDelete { id: 1 }]);
    assert_eq!(
        screen.update(Msg::DeleteConfirmed(1)),
        vec![Effect::Delete {
            resource: "lotes".into(),
            id: 1,
        }]
    );
    let effects = screen.update(Msg::Deleted {
        id: 1,
        result: Err(ApiError::from_response(409, r#"{"error": "lote en uso"}"#)),
    });
    assert!(effects.is_empty());
    assert_eq!(screen.error(), Some("lote en uso"));
    assert_eq!(screen.table().items.len(), 1);
}

#[test]
fn hook_rejection_keeps_the_modal_open() {
    let (mut screen, _) = mount("usuarios", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    input(&mut screen, 0, "contrasena", "123");

    assert!(screen.update(Msg::Submit(ModalLevel::ROOT)).is_empty());
    assert!(screen.main_modal().open);
    assert_eq!(
        screen.main_modal().error.as_deref(),
        Some("La contraseña debe tener al menos 6 caracteres")
    );
}

#[test]
fn productos_end_to_end() {
    let (mut screen, effects) = mount("productos", PermissionDescriptor::default());
    load(
        &mut screen,
        &effects,
        page(vec![json!({"id": 5, "nombre": "Maíz", "codigo": "TEMP"})], 1),
    );

    let columns: Vec<_> = screen.template().columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(columns, vec!["nombre"]);
    assert_eq!(screen.table().items.len(), 1);
    assert_eq!(
        crate::label::cell_text(
            &screen.table().items[0],
            screen.descriptor().field("nombre").expect("field"),
        ),
        "Maíz"
    );
    assert!(screen.pagination().is_empty());

    screen.update(Msg::OpenCreate);
    input(&mut screen, 0, "nombre", "Soya");
    let effects = screen.update(Msg::Submit(ModalLevel::ROOT));
    let mut expected = Payload::default();
    expected.insert("nombre", json!("Soya"));
    expected.insert("codigo", json!("TEMP"));
    assert_eq!(
        effects,
        vec![Effect::Create {
            target: ModalTarget::ROOT,
            resource: "productos".into(),
            payload: expected,
        }]
    );

    let effects = screen.update(Msg::Created {
        target: ModalTarget::ROOT,
        resource: "productos".into(),
        result: Ok(item(json!({"id": 6, "nombre": "Soya", "codigo": "P-006"}))),
    });
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchList { page: 1, .. }]
    ));
    assert!(!screen.main_modal().open);
    assert!(!screen.main_modal().is_busy());
}

/// Records which `after_*` hook ran.
struct SaveLog(Rc<RefCell<Vec<String>>>);

impl ResourceHooks for SaveLog {
    fn after_create(&self, _payload: &Payload) {
        self.0.borrow_mut().push("after_create".into());
    }

    fn after_update(&self, _payload: &Payload, id: ItemId) {
        self.0.borrow_mut().push(format!("after_update {id}"));
    }
}

fn mount_logged() -> (CrudScreen, Vec<Effect>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let registry = Rc::new(ResourceRegistry::new().with(
        ResourceDescriptor::new("Roles", "roles", vec![FieldDescriptor::text("nombre", "Nombre")])
            .hooks(SaveLog(log.clone())),
    ));
    let descriptor = registry.get("roles").expect("registered resource");
    let (screen, effects) = CrudPage::new(descriptor).setup(PermissionDescriptor::default(), registry);
    (screen, effects, log)
}

#[test]
fn update_finishing_after_cancel_runs_the_update_hook() {
    let (mut screen, effects, log) = mount_logged();
    load(&mut screen, &effects, page(vec![json!({"id": 3, "nombre": "Admin"})], 1));

    screen.update(Msg::Edit(3));
    assert!(matches!(
        screen.update(Msg::Submit(ModalLevel::ROOT)).as_slice(),
        [Effect::Update { id: 3, .. }]
    ));
    screen.update(Msg::Cancel(ModalLevel::ROOT));
    assert!(!screen.main_modal().open);
    assert!(screen.main_modal().is_busy());

    screen.update(Msg::OpenCreate);
    screen.update(Msg::Edit(3));
    assert!(!screen.main_modal().open);

    assert!(screen
        .update(Msg::Created {
            target: ModalTarget::ROOT,
            resource: "roles".into(),
            result: Ok(item(json!({"id": 9}))),
        })
        .is_empty());
    assert!(screen.main_modal().is_busy());

    let effects = screen.update(Msg::Updated { id: 3, result: Ok(()) });
    assert!(matches!(effects.as_slice(), [Effect::FetchList { page: 1, .. }]));
    assert_eq!(*log.borrow(), vec!["after_update 3".to_string()]);
    assert!(!screen.main_modal().is_busy());

    screen.update(Msg::OpenCreate);
    input(&mut screen, 0, "nombre", "Supervisor");
    assert_eq!(field_state(&screen, "nombre"), Some(FieldState::Input("Supervisor".into())));
    assert_eq!(
        created_target(&screen.update(Msg::Submit(ModalLevel::ROOT))),
        ModalTarget::ROOT
    );
}

#[test]
fn create_failure_keeps_the_modal_open() {
    let (mut screen, _) = mount("productos", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    input(&mut screen, 0, "nombre", "Soya");
    screen.update(Msg::Submit(ModalLevel::ROOT));

    let effects = screen.update(Msg::Created {
        target: ModalTarget::ROOT,
        resource: "productos".into(),
        result: Err(ApiError::from_response(400, r#"{"error": "nombre duplicado"}"#)),
    });
    assert!(effects.is_empty());
    assert!(screen.main_modal().open);
    assert!(!screen.main_modal().is_busy());
    assert_eq!(screen.main_modal().error.as_deref(), Some("nombre duplicado"));
    assert_eq!(field_state(&screen, "nombre"), Some(FieldState::Input("Soya".into())));

    assert_eq!(
        created_target(&screen.update(Msg::Submit(ModalLevel::ROOT))),
        ModalTarget::ROOT
    );
}

#[test]
fn update_failure_keeps_the_modal_open() {
    let (mut screen, effects) = mount("granjas", PermissionDescriptor::default());
    load(&mut screen, &effects, page(vec![json!({"id": 3})], 1));

    screen.update(Msg::Edit(3));
    assert!(matches!(
        screen.update(Msg::Submit(ModalLevel::ROOT)).as_slice(),
        [Effect::Update { id: 3, .. }]
    ));
    let failure = ApiError::Transport("timeout".into());
    let effects = screen.update(Msg::Updated {
        id: 3,
        result: Err(failure.clone()),
    });

    assert!(effects.is_empty());
    assert!(screen.main_modal().open);
    assert!(!screen.main_modal().is_busy());
    assert_eq!(screen.main_modal().editing, Some(3));
    assert_eq!(screen.main_modal().error, Some(failure.to_string()));
}

#[test]
fn late_related_fetch_keeps_records_created_meanwhile() {
    let (mut screen, _) = mount("choferes", PermissionDescriptor::default());
    screen.update(Msg::OpenCreate);
    screen.update(Msg::OpenRelated {
        origin: ModalLevel::ROOT,
        field: "id_personas".into(),
    });
    input(&mut screen, 1, "nombre", "María");
    let target = created_target(&screen.update(Msg::Submit(ModalLevel(1))));
    screen.update(Msg::Created {
        target,
        resource: "personas".into(),
        result: Ok(item(json!({"id": 31, "nombre": "María"}))),
    });

    screen.update(Msg::RelatedLoaded {
        target: ModalTarget::ROOT,
        field: "id_personas".into(),
        resource: "personas".into(),
        result: Ok(page(vec![json!({"id": 7, "nombre": "Juan"})], 1)),
    });

    let cached: Vec<_> = screen
        .related_cache()
        .get("personas")
        .unwrap_or_default()
        .iter()
        .filter_map(Item::id)
        .collect();
    assert_eq!(cached, vec![7, 31]);

    screen.update(Msg::ForeignKeyInput {
        level: ModalLevel::ROOT,
        field: "id_personas".into(),
        text: "María".into(),
    });
    assert_eq!(
        screen.main_modal().form.foreign_key("id_personas").and_then(|fk| fk.id),
        Some(31)
    );

    screen.update(Msg::RelatedLoaded {
        target: ModalTarget::ROOT,
        field: "id_personas".into(),
        resource: "personas".into(),
        result: Ok(page(
            vec![json!({"id": 7, "nombre": "Juan"}), json!({"id": 31, "nombre": "María"})],
            1,
        )),
    });
    assert_eq!(screen.related_cache().get("personas").map(<[_]>::len), Some(2));
}
