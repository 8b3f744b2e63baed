//! Events and the subscription list that maps them to actions.

use crate::fields::FieldId;
use crate::vendor::Category;

/// Kind of presentation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A field's text changed.
    Input,
    /// The user finished editing a field (focus loss).
    Commit,
    /// The vendor selection changed.
    VendorChanged,
}

/// An event raised on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub field: FieldId,
    pub kind: EventKind,
}

impl Event {
    pub fn new(field: FieldId, kind: EventKind) -> Self {
        Self { field, kind }
    }

    pub fn input(field: FieldId) -> Self {
        Self::new(field, EventKind::Input)
    }

    pub fn commit(field: FieldId) -> Self {
        Self::new(field, EventKind::Commit)
    }

    pub fn vendor_changed() -> Self {
        Self::new(FieldId::VendorSelect, EventKind::VendorChanged)
    }
}

/// Work performed in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run one category's generator.
    Regenerate(Category),
    /// Run every generator, SNMP then VLAN then interface.
    RegenerateAll,
    /// Clear the error marker on a field.
    ClearError(FieldId),
    /// Set or clear the `snmp-org` error marker from its normalized value.
    ValidateOrg,
    /// Rewrite a numeric coordinate field with fixed precision.
    FormatCoordinate(FieldId),
    /// Rewrite an out-of-range `vlan-id` with its clamped value.
    ClampVlanId,
}

/// One `(field, kind) -> actions` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Subscription {
    field: FieldId,
    kind: EventKind,
    actions: Vec<Action>,
}

/// Ordered subscription list.
///
/// Every entry matching an event contributes its actions, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn on(
        mut self,
        field: FieldId,
        kind: EventKind,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        self.entries.push(Subscription {
            field,
            kind,
            actions: actions.into_iter().collect(),
        });
        self
    }

    /// Actions for an event, in execution order.
    pub fn actions_for(&self, event: &Event) -> impl Iterator<Item = Action> + '_ {
        let event = *event;
        self.entries
            .iter()
            .filter(move |s| s.field == event.field && s.kind == event.kind)
            .flat_map(|s| s.actions.iter().copied())
    }
}

/// The standard wiring for the three generators.
pub fn default_subscriptions() -> Subscriptions {
    use FieldId::*;

    let mut subs = Subscriptions::new()
        .on(
            SnmpOrg,
            EventKind::Input,
            [
                Action::ClearError(SnmpOrg),
                Action::Regenerate(Category::Snmp),
            ],
        )
        .on(SnmpOrg, EventKind::Commit, [Action::ValidateOrg]);

    for coord in [SnmpLat, SnmpLong] {
        subs = subs
            .on(
                coord,
                EventKind::Input,
                [Action::Regenerate(Category::Snmp)],
            )
            .on(
                coord,
                EventKind::Commit,
                [
                    Action::FormatCoordinate(coord),
                    Action::Regenerate(Category::Snmp),
                ],
            );
    }

    for field in [VlanFinality, VlanInst, VlanService, VlanOper] {
        subs = subs.on(
            field,
            EventKind::Input,
            [Action::Regenerate(Category::Vlan)],
        );
    }
    subs = subs.on(
        VlanId,
        EventKind::Input,
        [Action::ClampVlanId, Action::Regenerate(Category::Vlan)],
    );

    for field in FieldId::inputs(Category::Interface) {
        subs = subs.on(
            field,
            EventKind::Input,
            [Action::Regenerate(Category::Interface)],
        );
    }

    subs.on(
        VendorSelect,
        EventKind::VendorChanged,
        [Action::RegenerateAll],
    )
}
