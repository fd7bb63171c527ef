pub mod launch_detail;
pub mod launch_list;
