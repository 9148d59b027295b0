//! Message handling for [`CrudScreen`]: every user action and every
//! backend response goes through [`CrudScreen::update`], which mutates the
//! state and returns the effects the host must perform next.

use log::{debug, warn};

use crate::error::ApiError;
use crate::form::FormState;
use crate::model::enums::EnumGroups;
use crate::model::item::{Item, ItemId, ListPage};
use crate::naming;
use crate::screen::effects::{Effect, RELATED_PAGE_SIZE};
use crate::screen::messages::Msg;
use crate::screen::modal_stack::{ModalLevel, ModalTarget};
use crate::screen::state::{CrudScreen, Submission, ADMIN_REQUIRED_MESSAGE};

impl CrudScreen {
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        if self.denied {
            return Vec::new();
        }

        match msg {
            Msg::ListLoaded {
                generation,
                page,
                result,
            } => {
                self.list_loaded(generation, page, result);
                Vec::new()
            }
            Msg::RelatedLoaded {
                target,
                field,
                resource,
                result,
            } => {
                self.related_loaded(target, &field, &resource, result);
                Vec::new()
            }
            Msg::EnumsLoaded { target, result } => {
                self.enums_loaded(target, result);
                Vec::new()
            }
            Msg::GoToPage(page) => self.reload(page.max(1)),
            Msg::OpenCreate => {
                if self.permissions.can_create && !self.main.is_busy() {
                    self.main.editing = None;
                    self.main.form.reset();
                    self.main.error = None;
                    self.main.open = true;
                }
                Vec::new()
            }
            Msg::Edit(id) => {
                self.open_edit(id);
                Vec::new()
            }
            Msg::Delete(id) => match self.item(id) {
                Some(item) if self.row_permissions(item).can_delete => {
                    vec![Effect::ConfirmDelete { id }]
                }
                _ => Vec::new(),
            },
            Msg::DeleteConfirmed(id) => {
                self.error = None;
                vec![Effect::Delete {
                    resource: self.descriptor.resource.clone(),
                    id,
                }]
            }
            Msg::Deleted { id, result } => match result {
                Ok(()) => {
                    debug!("{} {id} eliminado", self.descriptor.resource);
                    self.reload(1)
                }
                Err(err) => {
                    self.error = Some(err.to_string());
                    Vec::new()
                }
            },
            Msg::Input {
                level,
                field,
                value,
            } => {
                if let Some(form) = self.form_mut(level) {
                    form.set_value(&field, &value);
                }
                Vec::new()
            }
            Msg::Toggle {
                level,
                field,
                checked,
            } => {
                if let Some(form) = self.form_mut(level) {
                    form.set_checked(&field, checked);
                }
                Vec::new()
            }
            Msg::ForeignKeyInput { level, field, text } => {
                if let Some(form) = self.form_mut(level) {
                    form.type_foreign_key(&field, &text);
                }
                Vec::new()
            }
            Msg::Submit(level) if level.is_root() => self.submit_main(),
            Msg::Submit(level) => self.submit_nested(level),
            Msg::AdminChallengeResolved(validated) => self.admin_resolved(validated),
            Msg::Created { target, result, .. } if target.level.is_root() => {
                self.main_saved(None, result.map(|_| ()))
            }
            Msg::Created {
                target,
                resource,
                result,
            } => self.nested_created(target, &resource, result),
            Msg::Updated { id, result } => self.main_saved(Some(id), result),
            Msg::OpenRelated { origin, field } => self.open_related(origin, &field),
            Msg::Cancel(level) if level.is_root() => {
                self.main.open = false;
                self.stack.close_all();
                self.main.error = None;
                if matches!(self.main.submission, Submission::AwaitingAdmin { .. }) {
                    self.main.submission = Submission::Idle;
                }
                Vec::new()
            }
            Msg::Cancel(level) => {
                self.stack.close(level);
                Vec::new()
            }
        }
    }

    /// Requests `page` of the listing; older in-flight responses become stale.
    pub(crate) fn reload(&mut self, page: u32) -> Vec<Effect> {
        self.list_generation += 1;
        vec![Effect::FetchList {
            resource: self.descriptor.resource.clone(),
            page,
            page_size: self.descriptor.page_size,
            generation: self.list_generation,
        }]
    }

    fn list_loaded(&mut self, generation: u64, page: u32, result: Result<ListPage, ApiError>) {
        if generation != self.list_generation {
            debug!(
                "respuesta de {} descartada (generación {generation}, actual {})",
                self.descriptor.resource, self.list_generation
            );
            return;
        }
        match result {
            Ok(list) => {
                self.table.items = list.items;
                self.table.page = page;
                self.table.total_pages = list.total_pages;
                self.table.loaded = true;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn related_loaded(
        &mut self,
        target: ModalTarget,
        field: &str,
        resource: &str,
        result: Result<ListPage, ApiError>,
    ) {
        let items = match result {
            Ok(list) => list.items,
            Err(err) => {
                warn!("No se pudieron cargar datos para {resource}: {err}");
                return;
            }
        };

        // Records created from nested modals while the fetch was pending
        // are kept.
        if target.level.is_root() {
            let merged = self.related.merge(resource, items);
            self.main.form.set_suggestions(field, merged);
        } else if let Some(modal) = self.stack.target_mut(target) {
            let merged = self.related.merged_with(resource, items);
            modal.form.set_suggestions(field, &merged);
        } else {
            debug!("modal {target:?} cerrado; datos de {resource} descartados");
        }
    }

    fn enums_loaded(&mut self, target: ModalTarget, result: Result<EnumGroups, ApiError>) {
        let groups = match result {
            Ok(groups) => groups,
            Err(err) => {
                warn!("No se pudieron cargar los enums: {err}");
                return;
            }
        };

        if target.level.is_root() {
            self.main.form.populate_enums(&groups);
        } else if let Some(modal) = self.stack.target_mut(target) {
            modal.form.populate_enums(&groups);
        }
        self.enums = Some(groups);
    }

    fn open_edit(&mut self, id: ItemId) {
        if self.main.is_busy() {
            return;
        }
        let Some(item) = self.item(id).cloned() else {
            return;
        };
        if !self.row_permissions(&item).can_edit {
            return;
        }
        self.main.editing = Some(id);
        self.main.form.prefill(&item);
        self.main.error = None;
        self.main.open = true;
    }

    fn form_mut(&mut self, level: ModalLevel) -> Option<&mut FormState> {
        if level.is_root() {
            Some(&mut self.main.form)
        } else {
            self.stack.get_mut(level).map(|modal| &mut modal.form)
        }
    }

    fn submit_main(&mut self) -> Vec<Effect> {
        if !self.main.open || self.main.is_busy() {
            return Vec::new();
        }
        self.main.error = None;
        let mut payload = self.main.form.to_payload();
        let hooks = self.descriptor.hooks.clone();
        let resource = self.descriptor.resource.clone();

        match self.main.editing {
            Some(id) => {
                if !self.permissions.can_edit {
                    return Vec::new();
                }
                if let Some(hooks) = &hooks {
                    if let Err(err) = hooks.before_update(&mut payload, id) {
                        self.main.error = Some(err.to_string());
                        return Vec::new();
                    }
                }
                if self.permissions.requires_admin_for_edit {
                    self.main.submission = Submission::AwaitingAdmin { id, payload };
                    return vec![Effect::ChallengeAdmin];
                }
                self.main.submission = Submission::InFlight {
                    editing: Some(id),
                    payload: payload.clone(),
                };
                vec![Effect::Update {
                    resource,
                    id,
                    payload,
                }]
            }
            None => {
                if let Some(hooks) = &hooks {
                    if let Err(err) = hooks.before_create(&mut payload) {
                        self.main.error = Some(err.to_string());
                        return Vec::new();
                    }
                }
                self.main.submission = Submission::InFlight {
                    editing: None,
                    payload: payload.clone(),
                };
                vec![Effect::Create {
                    target: ModalTarget::ROOT,
                    resource,
                    payload,
                }]
            }
        }
    }

    fn admin_resolved(&mut self, validated: bool) -> Vec<Effect> {
        let Submission::AwaitingAdmin { id, payload } =
            std::mem::take(&mut self.main.submission)
        else {
            return Vec::new();
        };
        if !validated {
            self.main.error = Some(ADMIN_REQUIRED_MESSAGE.to_string());
            return Vec::new();
        }
        self.main.submission = Submission::InFlight {
            editing: Some(id),
            payload: payload.clone(),
        };
        vec![Effect::Update {
            resource: self.descriptor.resource.clone(),
            id,
            payload,
        }]
    }

    /// Outcome of the level-0 create (`saved == None`) or update request.
    ///
    /// Forms cannot be opened while a save is in flight, so the modal on
    /// screen, if any, is the one that sent the request.
    fn main_saved(&mut self, saved: Option<ItemId>, result: Result<(), ApiError>) -> Vec<Effect> {
        let (editing, payload) = match std::mem::take(&mut self.main.submission) {
            Submission::InFlight { editing, payload } if editing == saved => (editing, payload),
            other => {
                debug!("respuesta de guardado sin solicitud pendiente ({saved:?})");
                self.main.submission = other;
                return Vec::new();
            }
        };
        if let Err(err) = result {
            self.main.error = Some(err.to_string());
            return Vec::new();
        }

        if let Some(hooks) = &self.descriptor.hooks {
            match editing {
                Some(id) => hooks.after_update(&payload, id),
                None => hooks.after_create(&payload),
            }
        }
        self.main.open = false;
        self.stack.close_all();
        self.main.editing = None;
        self.main.error = None;
        self.main.form.reset();
        self.reload(1)
    }

    fn submit_nested(&mut self, level: ModalLevel) -> Vec<Effect> {
        let Some(modal) = self.stack.get_mut(level) else {
            return Vec::new();
        };
        if modal.is_submitting() {
            return Vec::new();
        }
        modal.error = None;
        let mut payload = modal.form.to_payload();
        if let Some(hooks) = &modal.descriptor.hooks {
            if let Err(err) = hooks.before_create(&mut payload) {
                modal.error = Some(err.to_string());
                return Vec::new();
            }
        }
        modal.pending = Some(payload.clone());
        vec![Effect::Create {
            target: ModalTarget {
                level,
                instance: modal.instance,
            },
            resource: modal.descriptor.resource.clone(),
            payload,
        }]
    }

    fn nested_created(
        &mut self,
        target: ModalTarget,
        resource: &str,
        result: Result<Item, ApiError>,
    ) -> Vec<Effect> {
        let Some(modal) = self.stack.target_mut(target) else {
            if let Ok(item) = result {
                debug!("{resource} creado tras cerrar el modal {target:?}");
                self.related.append(resource, item);
            }
            return Vec::new();
        };

        let item = match result {
            Ok(item) => item,
            Err(err) => {
                modal.pending = None;
                modal.error = Some(err.to_string());
                return Vec::new();
            }
        };

        let payload = modal.pending.take().unwrap_or_default();
        if let Some(hooks) = &modal.descriptor.hooks {
            hooks.after_create(&payload);
        }
        let origin_field = modal.origin_field.clone();

        let origin = ModalLevel(target.level.0 - 1);
        if let Some(form) = self.form_mut(origin) {
            form.select_new(&origin_field, &item);
        }
        self.related.append(resource, item);
        self.stack.close(target.level);
        Vec::new()
    }

    fn open_related(&mut self, origin: ModalLevel, field: &str) -> Vec<Effect> {
        let origin_open = if origin.is_root() {
            self.main.open
        } else {
            self.stack.get(origin).is_some()
        };
        if !origin_open || !naming::is_foreign_key(field) {
            return Vec::new();
        }

        let related = naming::related_resource_name(field);
        let Some(descriptor) = self.registry.get(&related) else {
            return vec![Effect::Alert(format!("No hay configuración para {related}"))];
        };

        let target = self.stack.open(origin.next(), descriptor, field);
        let mut effects = Vec::new();
        let Some(modal) = self.stack.target_mut(target) else {
            return effects;
        };

        let foreign_keys: Vec<(String, String)> = modal
            .form
            .foreign_keys()
            .map(|f| (f.name.clone(), naming::related_resource_name(&f.name)))
            .collect();
        for (name, resource) in foreign_keys {
            if let Some(cached) = self.related.get(&resource) {
                modal.form.set_suggestions(&name, cached);
            }
            effects.push(Effect::FetchRelated {
                target,
                field: name,
                resource,
                page_size: RELATED_PAGE_SIZE,
            });
        }

        if modal.form.has_enum_selects() {
            match &self.enums {
                Some(groups) => modal.form.populate_enums(groups),
                None => effects.push(Effect::FetchEnums { target }),
            }
        }
        effects
    }
}
