use serde::{Deserialize, Serialize};

/// Вид работ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "Tyre Services")]
    TyreServices,
    #[serde(rename = "Oil Services")]
    OilServices,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::TyreServices => "Tyre Services",
            ServiceType::OilServices => "Oil Services",
        }
    }

    pub fn all() -> Vec<ServiceType> {
        vec![ServiceType::TyreServices, ServiceType::OilServices]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Tyre Services" => Some(ServiceType::TyreServices),
            "Oil Services" => Some(ServiceType::OilServices),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
