//! 报表下载发起方：校验输入之后创建任务、请求接口、保存文件，并把结果交给任务追踪器。

pub mod functions;
pub mod structs;
pub mod traits;
