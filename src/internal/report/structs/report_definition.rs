use serde::Serialize;

use crate::internal::error::ReportError;

/// 可下载的报表。`id` 同时是接口路径的最后一段（`/report/{id}`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl ReportDefinition {
    /// 响应头里拿不到文件名时使用的默认文件名
    pub fn default_filename(&self) -> String {
        format!("report_{}.xlsx", self.id)
    }
}

static CATALOG: [ReportDefinition; 2] = [
    ReportDefinition {
        id: "32430",
        name: "Список пациентов с услугами по стационару",
        description: "Список пациентов с услугами по стационару + тип оплаты",
    },
    ReportDefinition {
        id: "invitro",
        name: "Анализы ИНВИТРО",
        description: "Отчет по лабораторным исследованиям Инвитро + тип оплаты",
    },
];

/// 内置报表目录
pub fn catalog() -> &'static [ReportDefinition] {
    &CATALOG
}

pub fn find_report(id: &str) -> Result<&'static ReportDefinition, ReportError> {
    CATALOG
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ReportError::UnknownReport(id.to_string()))
}
