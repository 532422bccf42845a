use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A reference the API either nests as an object or sends as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(i64),
    Embedded(T),
}

pub trait HasId {
    fn id(&self) -> i64;
}

impl<T: HasId> Ref<T> {
    pub fn id(&self) -> i64 {
        match self {
            Ref::Id(id) => *id,
            Ref::Embedded(item) => item.id(),
        }
    }

    pub fn embedded(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Embedded(item) => Some(item),
        }
    }
}

/// List endpoints answer with a bare array or a paginated `results` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Paged { results } => results,
        }
    }
}

fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => Ok(value),
        Decimal::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {}", text))),
    }
}

fn de_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Users & session -------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "employee")]
    Employee,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employé",
            Role::Admin => "Administrateur",
            Role::SuperAdmin => "Super administrateur",
        }
    }

    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Employee => "/employee/dashboard",
            Role::Admin => "/admin/dashboard",
            Role::SuperAdmin => "/superadmin/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "de_null_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

impl HasId for User {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access")]
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, alias = "detail")]
    pub message: String,
}

// --- Leave requests --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "conge_paye")]
    CongePaye,
    #[serde(rename = "maladie")]
    Maladie,
    #[serde(rename = "sans_solde")]
    SansSolde,
    #[serde(rename = "rtt")]
    Rtt,
    #[serde(rename = "autre")]
    Autre,
}

impl LeaveType {
    pub const ALL: [LeaveType; 5] = [
        LeaveType::CongePaye,
        LeaveType::Maladie,
        LeaveType::SansSolde,
        LeaveType::Rtt,
        LeaveType::Autre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::CongePaye => "conge_paye",
            LeaveType::Maladie => "maladie",
            LeaveType::SansSolde => "sans_solde",
            LeaveType::Rtt => "rtt",
            LeaveType::Autre => "autre",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::CongePaye => "Congé payé",
            LeaveType::Maladie => "Maladie",
            LeaveType::SansSolde => "Sans solde",
            LeaveType::Rtt => "RTT",
            LeaveType::Autre => "Autre",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[serde(rename = "en_attente")]
    EnAttente,
    #[serde(rename = "approuve")]
    Approuve,
    #[serde(rename = "rejete")]
    Rejete,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::EnAttente => "en_attente",
            LeaveStatus::Approuve => "approuve",
            LeaveStatus::Rejete => "rejete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::EnAttente => "En attente",
            LeaveStatus::Approuve => "Approuvé",
            LeaveStatus::Rejete => "Rejeté",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LeaveStatus::EnAttente => {
                "bg-status-warning-bg text-status-warning-text border-status-warning-border"
            }
            LeaveStatus::Approuve => {
                "bg-status-success-bg text-status-success-text border-status-success-border"
            }
            LeaveStatus::Rejete => {
                "bg-status-error-bg text-status-error-text border-status-error-border"
            }
        }
    }
}

/// Minimal person shape used when the API nests the requesting employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "de_null_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub email: String,
    #[serde(default)]
    pub matricule: Option<String>,
    #[serde(default)]
    pub user: Option<Box<Ref<User>>>,
}

impl PersonSummary {
    pub fn display_name(&self) -> String {
        if let Some(user) = self.user.as_ref().and_then(|user| user.embedded()) {
            return user.full_name();
        }
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if !name.is_empty() {
            name.to_string()
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            format!("Employé #{}", self.id)
        }
    }
}

impl HasId for PersonSummary {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee: Ref<PersonSummary>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub type_conge: LeaveType,
    #[serde(default, deserialize_with = "de_null_string")]
    pub description: String,
    pub statut: LeaveStatus,
    #[serde(default)]
    pub raison: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    pub fn employee_display(&self) -> String {
        if let Some(name) = self
            .employee_name
            .as_ref()
            .filter(|name| !name.trim().is_empty())
        {
            return name.clone();
        }
        match &self.employee {
            Ref::Embedded(person) => person.display_name(),
            Ref::Id(id) => format!("Employé #{}", id),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.statut == LeaveStatus::EnAttente
    }

    pub fn duration_days(&self) -> i64 {
        crate::utils::dates::leave_duration_days(self.date_debut, self.date_fin)
    }
}

/// Body for create (`POST`) and employee edit (`PATCH`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestPayload {
    pub type_conge: LeaveType,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub description: String,
}

/// Full-update body sent by a reviewer (`PUT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveReviewPayload {
    pub type_conge: LeaveType,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub description: String,
    pub statut: LeaveStatus,
    pub raison: String,
}

// --- Org structure ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub nom: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub description: String,
    #[serde(default)]
    pub chef_departement: Option<Ref<PersonSummary>>,
}

impl Department {
    pub fn chef_display(&self) -> String {
        match &self.chef_departement {
            Some(Ref::Embedded(person)) => person.display_name(),
            Some(Ref::Id(id)) => format!("Employé #{}", id),
            None => "—".to_string(),
        }
    }
}

impl HasId for Department {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub nom: String,
    pub description: String,
    pub chef_departement: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poste {
    pub id: i64,
    pub titre: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub description: String,
    #[serde(deserialize_with = "de_decimal")]
    pub salaire_de_base: f64,
    #[serde(default)]
    pub departement: Option<Ref<Department>>,
}

impl Poste {
    pub fn departement_id(&self) -> Option<i64> {
        self.departement.as_ref().map(Ref::id)
    }

    pub fn departement_display(&self) -> String {
        match &self.departement {
            Some(Ref::Embedded(dept)) => dept.nom.clone(),
            Some(Ref::Id(id)) => format!("Département #{}", id),
            None => "—".to_string(),
        }
    }
}

impl HasId for Poste {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostePayload {
    pub titre: String,
    pub description: String,
    pub salaire_de_base: f64,
    pub departement: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "actif")]
    Actif,
    #[serde(rename = "inactif")]
    Inactif,
    #[serde(rename = "suspendu")]
    Suspendu,
    #[serde(rename = "congé", alias = "conge")]
    Conge,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::Actif,
        EmployeeStatus::Inactif,
        EmployeeStatus::Suspendu,
        EmployeeStatus::Conge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Actif => "actif",
            EmployeeStatus::Inactif => "inactif",
            EmployeeStatus::Suspendu => "suspendu",
            EmployeeStatus::Conge => "congé",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Actif => "Actif",
            EmployeeStatus::Inactif => "Inactif",
            EmployeeStatus::Suspendu => "Suspendu",
            EmployeeStatus::Conge => "En congé",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: i64,
    pub user: Ref<User>,
    pub matricule: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub telephone: String,
    #[serde(default, deserialize_with = "de_null_string")]
    pub adresse: String,
    #[serde(default)]
    pub date_naissance: Option<NaiveDate>,
    #[serde(default)]
    pub date_embauche: Option<NaiveDate>,
    pub statut: EmployeeStatus,
    #[serde(default)]
    pub poste: Option<Ref<Poste>>,
}

impl EmployeeProfile {
    pub fn display_name(&self) -> String {
        match &self.user {
            Ref::Embedded(user) => user.full_name(),
            Ref::Id(_) => self.matricule.clone(),
        }
    }

    pub fn email(&self) -> String {
        self.user
            .embedded()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    }

    pub fn poste_id(&self) -> Option<i64> {
        self.poste.as_ref().map(Ref::id)
    }

    pub fn poste_display(&self) -> String {
        match &self.poste {
            Some(Ref::Embedded(poste)) => poste.titre.clone(),
            Some(Ref::Id(id)) => format!("Poste #{}", id),
            None => "—".to_string(),
        }
    }
}

impl HasId for EmployeeProfile {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub user: EmployeeUserPayload,
    pub matricule: String,
    pub telephone: String,
    pub adresse: String,
    pub date_naissance: Option<NaiveDate>,
    pub date_embauche: Option<NaiveDate>,
    pub statut: EmployeeStatus,
    pub poste: Option<i64>,
}

/// Body for creating or updating an admin or super-admin account.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
