////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹
// 2. 每个Domain由两部分组成:
//    - model: 定义Schema
//    - repository: 实际的存储操作
//
// 数据只保存在进程内存中，重启后回到默认坐标
//
//////////////////////////////////////////////////////////////////////

use position::model::PositionSnapshot;
use tokio::sync::RwLock;

pub mod position;

pub use position::model::Position;
pub use position::repository::{DynPositionRepository, PositionRepositoryTrait};

/// 进程内唯一的最新坐标存储
#[derive(Debug, Default)]
pub struct PositionStore {
    latest: RwLock<PositionSnapshot>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}
