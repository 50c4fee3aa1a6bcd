//! 诊断流程状态模块
//!
//! 患者资料草稿与最新预测结果的内存状态。草稿只在本机内存中，
//! 不落盘也不上传；只有发起预测时才随请求提交。
//! 路由守卫通过派生信号感知 "是否有草稿 / 是否有结果"。

use heartlens_shared::{PatientRecord, PredictionResult};
use leptos::prelude::*;

/// 诊断流程状态
#[derive(Clone, Copy)]
pub struct WorkflowState {
    /// 患者资料草稿（进入扫描/指标录入界面的前提）
    pub patient: RwSignal<Option<PatientRecord>>,
    /// 最新一次预测结果（进入结果界面的前提）
    pub result: RwSignal<Option<PredictionResult>>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self {
            patient: RwSignal::new(None),
            result: RwSignal::new(None),
        }
    }

    /// 守卫输入：当前是否持有患者草稿
    pub fn has_patient_signal(&self) -> Signal<bool> {
        let patient = self.patient;
        Signal::derive(move || patient.get().is_some())
    }

    /// 守卫输入：当前是否持有预测结果
    pub fn has_result_signal(&self) -> Signal<bool> {
        let result = self.result;
        Signal::derive(move || result.get().is_some())
    }

    /// 开始新一轮诊断：清空草稿与结果
    pub fn reset(&self) {
        self.patient.set(None);
        self.result.set(None);
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取流程状态
pub fn use_workflow() -> WorkflowState {
    use_context::<WorkflowState>().expect("WorkflowState should be provided")
}
