
pub mod paging {
    pub mod engine;
    pub mod policy;
    pub mod summary;
}

pub mod sched {
    pub mod engine;
    pub mod process;
    pub mod summary;
    pub mod timeline;
}

pub mod render {
    pub mod frames;
    pub mod gantt;
    pub mod playback;
}

pub mod cli {
    pub mod parse;
    pub mod shell;
    pub mod utils;
}
