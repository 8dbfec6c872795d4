use serde::{Deserialize, Serialize};
use crate::model::locale::{Locale, Tone};

/// 检测阶段产出的单条网络流，`flow_id` 只在所属任务内唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    #[serde(rename = "flowId")]
    pub flow_id: String,
    #[serde(rename = "taskID")]
    pub task_id: String,
    #[serde(rename = "beginTime", default, deserialize_with = "crate::model::optional_time")]
    pub begin_time: Option<String>,
    #[serde(rename = "srcIP", default)]
    pub src_ip: String,
    #[serde(rename = "dstIP", default)]
    pub dst_ip: String,
    #[serde(rename = "srcPort", default)]
    pub src_port: u16,
    #[serde(rename = "dstPort", default)]
    pub dst_port: u16,
    #[serde(default)]
    pub issuer: String,
    #[serde(rename = "commonName", default)]
    pub common_name: String,
    #[serde(default)]
    pub validity: String,
    #[serde(rename = "whiteProb", default)]
    pub white_prob: f64,
    #[serde(rename = "blackProb", default)]
    pub black_prob: f64,
    #[serde(default)]
    pub classification: Classification,
}

impl Flow {
    pub fn new(flow_id: impl Into<String>, task_id: impl Into<String>, classification: Classification) -> Self {
        Self {
            flow_id: flow_id.into(),
            task_id: task_id.into(),
            begin_time: None,
            src_ip: String::new(),
            dst_ip: String::new(),
            src_port: 0,
            dst_port: 0,
            issuer: String::new(),
            common_name: String::new(),
            validity: String::new(),
            white_prob: 0.0,
            black_prob: 0.0,
            classification,
        }
    }

    pub fn is_anomalous(&self) -> bool {
        self.classification == Classification::Anomalous
    }
}

/// Verdict code; codes the classifier does not define are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Classification {
    #[default]
    Normal,
    Anomalous,
    Unknown(i64),
}

impl From<i64> for Classification {
    fn from(code: i64) -> Self {
        match code {
            0 => Classification::Normal,
            1 => Classification::Anomalous,
            other => Classification::Unknown(other),
        }
    }
}

impl From<Classification> for i64 {
    fn from(c: Classification) -> Self {
        c.code()
    }
}

impl Classification {
    pub fn code(self) -> i64 {
        match self {
            Classification::Normal => 0,
            Classification::Anomalous => 1,
            Classification::Unknown(code) => code,
        }
    }

    pub fn label(self, locale: Locale) -> String {
        let text = match (self, locale) {
            (Classification::Normal, Locale::En) => "Normal",
            (Classification::Normal, Locale::Zh) => "正常",
            (Classification::Anomalous, Locale::En) => "Anomalous",
            (Classification::Anomalous, Locale::Zh) => "异常",
            (Classification::Unknown(code), _) => return format!("#{}", code),
        };
        text.to_string()
    }

    pub fn tone(self) -> Tone {
        match self {
            Classification::Normal => Tone::Success,
            Classification::Anomalous => Tone::Error,
            Classification::Unknown(_) => Tone::Default,
        }
    }
}
