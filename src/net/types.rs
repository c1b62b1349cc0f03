//! Wire DTOs for the maintenance REST API.
//!
//! DESIGN
//! ======
//! Records mirror the backend JSON so serde round-trips stay lossless. Read
//! models (`Asset`, `WorkOrder`, ...) carry ids and server-computed fields;
//! `*Input` payloads carry only what the backend accepts on create/update.
//! Calendar dates stay as ISO `YYYY-MM-DD` strings on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH + ACCOUNT
// =============================================================================

/// Profile returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub company_id: Option<i64>,
}

/// Bearer token returned by `POST /token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Company + administrator account payload for `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub admin_email: String,
    pub admin_password: String,
}

/// Subscription plan listed by `GET /payments/plans`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payment-provider redirect returned by checkout creation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub init_point: String,
}

// =============================================================================
// ARCHIVES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SectorInput {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Sector> for SectorInput {
    fn from(sector: &Sector) -> Self {
        Self { name: sector.name.clone(), description: sector.description.clone() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl AssetStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Maintenance];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Inactive => "Inactivo",
            Self::Maintenance => "En mantenimiento",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub sector_id: i64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub status: AssetStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssetInput {
    pub name: String,
    pub sector_id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub status: AssetStatus,
}

impl From<&Asset> for AssetInput {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            sector_id: asset.sector_id,
            brand: asset.brand.clone(),
            model: asset.model.clone(),
            serial_number: asset.serial_number.clone(),
            purchase_date: asset.purchase_date.clone(),
            status: asset.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub rut_dni: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub sector_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Worker {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WorkerInput {
    pub first_name: String,
    pub last_name: String,
    pub rut_dni: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub sector_id: Option<i64>,
}

impl From<&Worker> for WorkerInput {
    fn from(worker: &Worker) -> Self {
        Self {
            first_name: worker.first_name.clone(),
            last_name: worker.last_name.clone(),
            rut_dni: worker.rut_dni.clone(),
            email: worker.email.clone(),
            phone: worker.phone.clone(),
            job_title: worker.job_title.clone(),
            sector_id: worker.sector_id,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolStatus {
    #[default]
    Available,
    InUse,
    Broken,
    Lost,
}

impl ToolStatus {
    pub const ALL: [Self; 4] = [Self::Available, Self::InUse, Self::Broken, Self::Lost];

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::InUse => "En uso",
            Self::Broken => "Rota",
            Self::Lost => "Perdida",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Broken => "BROKEN",
            Self::Lost => "LOST",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub status: ToolStatus,
    #[serde(default)]
    pub current_worker_id: Option<i64>,
    #[serde(default)]
    pub current_sector_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ToolInput {
    pub name: String,
    pub code: Option<String>,
    pub brand: Option<String>,
    pub status: ToolStatus,
    pub current_worker_id: Option<i64>,
    pub current_sector_id: Option<i64>,
}

impl From<&Tool> for ToolInput {
    fn from(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            code: tool.code.clone(),
            brand: tool.brand.clone(),
            status: tool.status,
            current_worker_id: tool.current_worker_id,
            current_sector_id: tool.current_sector_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparePartCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SparePartCategoryInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparePart {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub internal_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub cost: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub stock: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SparePartInput {
    pub name: String,
    pub internal_code: Option<String>,
    pub cost: f64,
    pub currency: String,
    pub stock: i64,
    pub category_id: Option<i64>,
}

impl Default for SparePartInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            internal_code: None,
            cost: 0.0,
            currency: default_currency(),
            stock: 0,
            category_id: None,
        }
    }
}

impl From<&SparePart> for SparePartInput {
    #[allow(clippy::cast_possible_truncation)]
    fn from(part: &SparePart) -> Self {
        Self {
            name: part.name.clone(),
            internal_code: part.internal_code.clone(),
            cost: part.cost,
            currency: part.currency.clone(),
            stock: part.stock.round() as i64,
            category_id: part.category_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Categories ("rubros") the supplier serves.
    #[serde(default)]
    pub categories: Vec<SparePartCategory>,
}

impl Supplier {
    pub fn serves_category(&self, category_id: i64) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SupplierInput {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub category_ids: Vec<i64>,
}

impl From<&Supplier> for SupplierInput {
    fn from(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            address: supplier.address.clone(),
            city: supplier.city.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            contact_name: supplier.contact_name.clone(),
            contact_phone: supplier.contact_phone.clone(),
            category_ids: supplier.categories.iter().map(|c| c.id).collect(),
        }
    }
}

// =============================================================================
// PREVENTIVE PLANS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyType {
    #[serde(rename = "DIARIA")]
    Daily,
    #[serde(rename = "SEMANAL")]
    Weekly,
    #[default]
    #[serde(rename = "MENSUAL")]
    Monthly,
    #[serde(rename = "ANUAL")]
    Yearly,
}

impl FrequencyType {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Daily => "DIARIA",
            Self::Weekly => "SEMANAL",
            Self::Monthly => "MENSUAL",
            Self::Yearly => "ANUAL",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_wire() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Diaria",
            Self::Weekly => "Semanal",
            Self::Monthly => "Mensual",
            Self::Yearly => "Anual",
        }
    }

    /// Unit label, singular or plural for `value`.
    pub fn unit_label(self, value: u32) -> &'static str {
        match (self, value == 1) {
            (Self::Daily, true) => "día",
            (Self::Daily, false) => "días",
            (Self::Weekly, true) => "semana",
            (Self::Weekly, false) => "semanas",
            (Self::Monthly, true) => "mes",
            (Self::Monthly, false) => "meses",
            (Self::Yearly, true) => "año",
            (Self::Yearly, false) => "años",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreventiveTask {
    pub description: String,
    /// Estimated minutes.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub estimated_time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreventivePlan {
    pub id: i64,
    pub name: String,
    pub asset_id: i64,
    #[serde(default)]
    pub frequency_type: FrequencyType,
    #[serde(default = "default_one")]
    pub frequency_value: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub next_run: Option<String>,
    #[serde(default)]
    pub tasks: Vec<PreventiveTask>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreventivePlanInput {
    pub name: String,
    pub asset_id: i64,
    pub frequency_type: FrequencyType,
    pub frequency_value: u32,
    pub is_active: bool,
    pub tasks: Vec<PreventiveTask>,
}

/// Result of `POST /preventive-plans/check-and-run`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckAndRunResult {
    #[serde(default)]
    pub status: String,
    pub generated_count: u32,
}

// =============================================================================
// WORK ORDERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    #[default]
    Pendiente,
    Asignada,
    EnProgreso,
    Pausada,
    Completada,
    Cancelada,
}

impl WorkOrderStatus {
    pub const ALL: [Self; 6] = [
        Self::Pendiente,
        Self::Asignada,
        Self::EnProgreso,
        Self::Pausada,
        Self::Completada,
        Self::Cancelada,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Asignada => "ASIGNADA",
            Self::EnProgreso => "EN_PROGRESO",
            Self::Pausada => "PAUSADA",
            Self::Completada => "COMPLETADA",
            Self::Cancelada => "CANCELADA",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Asignada => "Asignada",
            Self::EnProgreso => "En progreso",
            Self::Pausada => "Pausada",
            Self::Completada => "Completada",
            Self::Cancelada => "Cancelada",
        }
    }

    /// Badge modifier class used by the status pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pendiente => "badge badge--yellow",
            Self::Asignada => "badge badge--blue",
            Self::EnProgreso => "badge badge--purple",
            Self::Pausada => "badge badge--gray",
            Self::Completada => "badge badge--green",
            Self::Cancelada => "badge badge--red",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baja,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alta => "Alta",
            Self::Media => "Media",
            Self::Baja => "Baja",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Alta => "priority priority--high",
            Self::Media => "priority priority--medium",
            Self::Baja => "priority priority--low",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderType {
    #[default]
    Correctivo,
    Preventivo,
}

impl WorkOrderType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Correctivo => "Correctivo",
            Self::Preventivo => "Preventivo",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    #[serde(default)]
    pub ticket_number: String,
    #[serde(rename = "type", default)]
    pub kind: WorkOrderType,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub asset_id: Option<i64>,
    #[serde(default)]
    pub sector_id: Option<i64>,
    #[serde(default)]
    pub assigned_to_id: Option<i64>,
    #[serde(default)]
    pub requested_by_id: Option<i64>,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Create/update payload. The backend's update replaces every editable
/// field, so status changes send the whole record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WorkOrderInput {
    pub asset_id: Option<i64>,
    pub sector_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: WorkOrderType,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub description: String,
    pub observations: Option<String>,
    pub assigned_to_id: Option<i64>,
}

impl WorkOrderInput {
    pub fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }
}

impl From<&WorkOrder> for WorkOrderInput {
    fn from(order: &WorkOrder) -> Self {
        Self {
            asset_id: order.asset_id,
            sector_id: order.sector_id,
            kind: order.kind,
            status: order.status,
            priority: order.priority,
            description: order.description.clone(),
            observations: order.observations.clone(),
            assigned_to_id: order.assigned_to_id,
        }
    }
}

// =============================================================================
// PURCHASE ORDERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    #[default]
    Pendiente,
    ParcialmenteRecibido,
    Completada,
    Cancelada,
}

impl PurchaseOrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::ParcialmenteRecibido => "Parcialmente recibida",
            Self::Completada => "Recibida",
            Self::Cancelada => "Cancelada",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pendiente => "badge badge--yellow",
            Self::ParcialmenteRecibido => "badge badge--blue",
            Self::Completada => "badge badge--green",
            Self::Cancelada => "badge badge--red",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub spare_part_id: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub received_quantity: f64,
    /// Omitted when unset; the backend rejects an explicit `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,
}

impl PurchaseOrderItem {
    /// A fresh line: one unit, nothing received.
    pub fn blank() -> Self {
        Self { quantity: 1.0, ..Self::default() }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Quantity still expected from the supplier, never negative.
    pub fn pending_quantity(&self) -> f64 {
        (self.quantity - self.received_quantity).max(0.0)
    }

    /// Fill description and unit price from the selected spare part.
    pub fn apply_spare_part(&mut self, part: &SparePart) {
        self.spare_part_id = Some(part.id);
        self.description.clone_from(&part.name);
        self.unit_price = part.cost;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    #[serde(default)]
    pub order_number: Option<String>,
    pub supplier_id: i64,
    pub order_date: String,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
}

/// Create/update payload; an update replaces all line items.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PurchaseOrderInput {
    /// Left empty to let the backend assign `OC-<year>-<seq>`.
    pub order_number: Option<String>,
    pub supplier_id: i64,
    pub order_date: String,
    pub delivery_date: Option<String>,
    pub observations: Option<String>,
    pub items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrderInput {
    pub fn total(&self) -> f64 {
        self.items.iter().map(PurchaseOrderItem::line_total).sum()
    }
}

impl From<&PurchaseOrder> for PurchaseOrderInput {
    fn from(order: &PurchaseOrder) -> Self {
        Self {
            order_number: order.order_number.clone(),
            supplier_id: order.supplier_id,
            order_date: order.order_date.clone(),
            delivery_date: order.delivery_date.clone(),
            observations: order.observations.clone(),
            items: order.items.clone(),
        }
    }
}

// =============================================================================
// SETTINGS + DASHBOARD
// =============================================================================

/// Company profile from `GET /settings/general`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email_contact: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Partial update for `PUT /settings/general`; unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompanySettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_contact: Option<String>,
}

impl From<&CompanySettings> for CompanySettingsUpdate {
    fn from(settings: &CompanySettings) -> Self {
        Self {
            name: Some(settings.name.clone()),
            address: settings.address.clone(),
            city: settings.city.clone(),
            postal_code: settings.postal_code.clone(),
            province: settings.province.clone(),
            phone: settings.phone.clone(),
            email_contact: settings.email_contact.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogoUpload {
    pub logo_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusCounts {
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub paused: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct YearlyStats {
    #[serde(default)]
    pub corrective: u32,
    #[serde(default)]
    pub preventive: u32,
    #[serde(default)]
    pub total: u32,
}

/// Payload of `GET /dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub counts: StatusCounts,
    #[serde(default)]
    pub recent_activity: Vec<WorkOrder>,
    #[serde(default)]
    pub yearly_stats: YearlyStats,
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_one() -> u32 {
    1
}

fn default_currency() -> String {
    "ARS".to_owned()
}

/// Accept a JSON number or a decimal string (the backend serializes
/// `Numeric` columns as strings); `null` reads as zero.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected decimal string, got {text:?}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number or decimal string")),
    }
}
