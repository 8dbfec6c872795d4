use serde::Serialize;
use crate::model::{Flow, Locale, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    DateTime,
    Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskColumn {
    TaskId,
    CreateTime,
    StartTime,
    EndTime,
    Status,
}

const FULL_TASK_SCHEMA: &[TaskColumn] = &[
    TaskColumn::TaskId,
    TaskColumn::CreateTime,
    TaskColumn::StartTime,
    TaskColumn::EndTime,
    TaskColumn::Status,
];

const REDUCED_TASK_SCHEMA: &[TaskColumn] = &[TaskColumn::TaskId];

/// 选中任务后，任务面板收缩为仅显示 ID 的窄列
pub fn task_columns(has_selection: bool) -> &'static [TaskColumn] {
    if has_selection { REDUCED_TASK_SCHEMA } else { FULL_TASK_SCHEMA }
}

impl TaskColumn {
    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TaskColumn::TaskId, Locale::En) => "Task ID",
            (TaskColumn::TaskId, Locale::Zh) => "任务ID",
            (TaskColumn::CreateTime, Locale::En) => "Created",
            (TaskColumn::CreateTime, Locale::Zh) => "任务创建时间",
            (TaskColumn::StartTime, Locale::En) => "Started",
            (TaskColumn::StartTime, Locale::Zh) => "任务开始时间",
            (TaskColumn::EndTime, Locale::En) => "Finished",
            (TaskColumn::EndTime, Locale::Zh) => "任务结束时间",
            (TaskColumn::Status, Locale::En) => "Status",
            (TaskColumn::Status, Locale::Zh) => "状态",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            TaskColumn::TaskId => ValueKind::Text,
            TaskColumn::Status => ValueKind::Enum,
            _ => ValueKind::DateTime,
        }
    }

    pub fn cell(self, task: &Task, locale: Locale) -> String {
        match self {
            TaskColumn::TaskId => task.task_id.clone(),
            TaskColumn::CreateTime => time_cell(&task.create_time),
            TaskColumn::StartTime => time_cell(&task.start_time),
            TaskColumn::EndTime => time_cell(&task.end_time),
            TaskColumn::Status => task.status.label(locale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowColumn {
    TaskId,
    FlowId,
    BeginTime,
    SrcIp,
    DstIp,
    SrcPort,
    DstPort,
    Issuer,
    CommonName,
    Validity,
    WhiteProb,
    BlackProb,
    Classification,
}

impl FlowColumn {
    pub const ALL: &'static [FlowColumn] = &[
        FlowColumn::TaskId,
        FlowColumn::FlowId,
        FlowColumn::BeginTime,
        FlowColumn::SrcIp,
        FlowColumn::DstIp,
        FlowColumn::SrcPort,
        FlowColumn::DstPort,
        FlowColumn::Issuer,
        FlowColumn::CommonName,
        FlowColumn::Validity,
        FlowColumn::WhiteProb,
        FlowColumn::BlackProb,
        FlowColumn::Classification,
    ];

    pub fn title(self, locale: Locale) -> &'static str {
        let (en, zh) = match self {
            FlowColumn::TaskId => ("Task ID", "任务ID"),
            FlowColumn::FlowId => ("Flow ID", "流ID"),
            FlowColumn::BeginTime => ("Begin", "开始时间"),
            FlowColumn::SrcIp => ("Source IP", "源IP"),
            FlowColumn::DstIp => ("Destination IP", "目的IP"),
            FlowColumn::SrcPort => ("Source port", "源端口"),
            FlowColumn::DstPort => ("Destination port", "目的端口"),
            FlowColumn::Issuer => ("Issuer", "异常信息"),
            FlowColumn::CommonName => ("Common Name", "Common Name"),
            FlowColumn::Validity => ("Validity", "Validity"),
            FlowColumn::WhiteProb => ("Normal prob.", "正常概率"),
            FlowColumn::BlackProb => ("Anomaly prob.", "异常概率"),
            FlowColumn::Classification => ("Verdict", "分类结果"),
        };
        match locale {
            Locale::En => en,
            Locale::Zh => zh,
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            FlowColumn::BeginTime => ValueKind::DateTime,
            FlowColumn::Classification => ValueKind::Enum,
            _ => ValueKind::Text,
        }
    }

    pub fn cell(self, flow: &Flow, locale: Locale) -> String {
        match self {
            FlowColumn::TaskId => flow.task_id.clone(),
            FlowColumn::FlowId => flow.flow_id.clone(),
            FlowColumn::BeginTime => time_cell(&flow.begin_time),
            FlowColumn::SrcIp => flow.src_ip.clone(),
            FlowColumn::DstIp => flow.dst_ip.clone(),
            FlowColumn::SrcPort => flow.src_port.to_string(),
            FlowColumn::DstPort => flow.dst_port.to_string(),
            FlowColumn::Issuer => flow.issuer.clone(),
            FlowColumn::CommonName => flow.common_name.clone(),
            FlowColumn::Validity => flow.validity.clone(),
            FlowColumn::WhiteProb => format!("{:.4}", flow.white_prob),
            FlowColumn::BlackProb => format!("{:.4}", flow.black_prob),
            FlowColumn::Classification => flow.classification.label(locale),
        }
    }
}

fn time_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Grid spans (out of 24) for the task and detail panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelLayout {
    pub task_span: u8,
    pub detail_span: u8,
}

impl PanelLayout {
    pub fn for_selection(has_selection: bool) -> Self {
        if has_selection {
            Self { task_span: 4, detail_span: 20 }
        } else {
            Self { task_span: 24, detail_span: 0 }
        }
    }
}

pub fn selection_banner(selected: Option<&str>, locale: Locale) -> String {
    match (selected, locale) {
        (Some(id), Locale::En) => format!("Selected: {}", id),
        (Some(id), Locale::Zh) => format!("当前选择{}", id),
        (None, Locale::En) => "Select a task to review".to_string(),
        (None, Locale::Zh) => "请选择要查看的任务".to_string(),
    }
}
