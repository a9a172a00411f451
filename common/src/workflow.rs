//! 融合流程状态机
//!
//! Idle → PhotoSelected → Uploading → Fusing → ResultReady，任意状态可 reset 回 Idle。
//!
//! 网络请求由调用方发起，完成后带着 `begin_generate` 发出的 `Ticket` 回报结果。
//! 票据不是当前票据的回报（例如上传途中用户点了重置）会被丢弃。
//! 照片预览的异步读取同理，用 `selection` 票据判断照片是否已被替换。

use crate::api::FusionRequest;
use crate::error::{Error, Result};
use crate::types::{FusionResult, UploadedPhoto};
use crate::validation::validate_photo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    PhotoSelected,
    Uploading,
    Fusing,
    ResultReady,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::PhotoSelected => "photo-selected",
            WorkflowState::Uploading => "uploading",
            WorkflowState::Fusing => "fusing",
            WorkflowState::ResultReady => "result-ready",
        }
    }
}

/// 一次生成尝试的票据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct FusionWorkflow<P> {
    template_id: String,
    max_upload_bytes: u64,
    state: WorkflowState,
    photo: Option<UploadedPhoto<P>>,
    result: Option<FusionResult>,
    generation: u64,
    selection: u64,
}

impl<P> FusionWorkflow<P> {
    pub fn new(template_id: impl Into<String>, max_upload_bytes: u64) -> Self {
        Self {
            template_id: template_id.into(),
            max_upload_bytes,
            state: WorkflowState::Idle,
            photo: None,
            result: None,
            generation: 0,
            selection: 0,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn photo(&self) -> Option<&UploadedPhoto<P>> {
        self.photo.as_ref()
    }

    pub fn result(&self) -> Option<&FusionResult> {
        self.result.as_ref()
    }

    /// 当前照片的票据
    pub fn selection(&self) -> Ticket {
        Ticket(self.selection)
    }

    /// 选中后没有再换照片或重置
    pub fn is_current_selection(&self, ticket: Ticket) -> bool {
        self.photo.is_some() && ticket.0 == self.selection
    }

    /// 上传或融合进行中
    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Uploading | WorkflowState::Fusing)
    }

    pub fn can_generate(&self) -> bool {
        self.photo.is_some() && !self.is_loading()
    }

    pub fn can_save(&self) -> bool {
        self.result.is_some()
    }

    pub fn save_target(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.download_target())
    }

    pub fn share_link(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.share_link())
    }

    /// 校验失败时状态不变
    pub fn select_photo(&mut self, photo: UploadedPhoto<P>) -> Result<()> {
        if self.is_loading() {
            return Err(Error::Busy);
        }
        validate_photo(&photo.mime_type, photo.size, self.max_upload_bytes)?;

        self.photo = Some(photo);
        self.state = WorkflowState::PhotoSelected;
        self.selection += 1;
        Ok(())
    }

    /// 进入 Uploading，返回票据与要上传的照片
    pub fn begin_generate(&mut self) -> Result<(Ticket, &UploadedPhoto<P>)> {
        if self.is_loading() {
            return Err(Error::Busy);
        }
        let photo = self.photo.as_ref().ok_or(Error::NoPhoto)?;

        self.generation += 1;
        self.state = WorkflowState::Uploading;
        Ok((Ticket(self.generation), photo))
    }

    /// 上传完成。成功进入 Fusing 并返回融合请求，失败回到 PhotoSelected
    pub fn complete_upload(&mut self, ticket: Ticket, outcome: Result<String>) -> Result<FusionRequest> {
        self.check_ticket(ticket, WorkflowState::Uploading, "complete_upload")?;

        match outcome {
            Ok(user_image_url) => {
                self.state = WorkflowState::Fusing;
                Ok(FusionRequest {
                    user_image_url,
                    template_id: self.template_id.clone(),
                })
            }
            Err(e) => {
                self.state = WorkflowState::PhotoSelected;
                Err(e)
            }
        }
    }

    /// 融合完成。成功进入 ResultReady，失败回到 PhotoSelected
    pub fn complete_fusion(&mut self, ticket: Ticket, outcome: Result<FusionResult>) -> Result<&FusionResult> {
        self.check_ticket(ticket, WorkflowState::Fusing, "complete_fusion")?;

        match outcome {
            Ok(result) => {
                self.state = WorkflowState::ResultReady;
                Ok(&*self.result.insert(result))
            }
            Err(e) => {
                self.state = WorkflowState::PhotoSelected;
                Err(e)
            }
        }
    }

    /// 清空照片与结果，作废进行中的票据
    pub fn reset(&mut self) {
        self.photo = None;
        self.result = None;
        self.state = WorkflowState::Idle;
        self.generation += 1;
        self.selection += 1;
    }

    fn check_ticket(&self, ticket: Ticket, expected: WorkflowState, action: &'static str) -> Result<()> {
        if ticket.0 != self.generation {
            return Err(Error::StaleResponse);
        }
        if self.state != expected {
            return Err(Error::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }
}
