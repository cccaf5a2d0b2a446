#![forbid(unsafe_code)]

//! Translation bundles shipped with the kit.
//!
//! `zh-cn` is the built-in process-wide default; `en` mirrors its key set.
//! Applications with their own bundles simply never call these.

use crate::language::{Language, TextTable};

/// Simplified Chinese, the built-in default bundle.
#[must_use]
pub fn zh_cn() -> Language {
    let mut common = TextTable::new();
    common.insert_text("confirm", "确定");
    common.insert_text("cancel", "取消");
    common.insert_text("loading", "加载中...");
    common.insert_text("empty", "暂无数据");
    common.insert_text("search", "搜索");
    common.insert_text("reset", "重置");

    let mut pagination = TextTable::new();
    pagination.insert_text("total", "共 {total} 条");
    pagination.insert_text("goto", "前往");
    pagination.insert_text("page", "页");
    pagination.insert_text("prev", "上一页");
    pagination.insert_text("next", "下一页");
    pagination.insert_text("page_size", "{size} 条/页");

    let mut dialog = TextTable::new();
    dialog.insert_text("title", "提示");
    dialog.insert_text("close", "关闭");

    let mut popconfirm = TextTable::new();
    popconfirm.insert_text("confirm", "确定");
    popconfirm.insert_text("cancel", "取消");

    let mut table = TextTable::new();
    table.insert_text("empty", "暂无数据");
    table.insert_text("sum", "合计");
    table.insert_text("selected", "已选择 {count} 项");

    let mut select = TextTable::new();
    select.insert_text("placeholder", "请选择");
    select.insert_text("no_match", "无匹配数据");

    let mut upload = TextTable::new();
    upload.insert_text("drop", "将文件拖到此处");
    upload.insert_text("click", "点击上传");
    upload.insert_text("limit", "最多上传 {limit} 个文件");
    upload.insert_text("size_exceeded", "文件大小不能超过 {size}");

    let root = TextTable::new()
        .with_table("common", common)
        .with_table("pagination", pagination)
        .with_table("dialog", dialog)
        .with_table("popconfirm", popconfirm)
        .with_table("table", table)
        .with_table("select", select)
        .with_table("upload", upload);

    Language::new("zh-cn", root)
}

/// English, same key set as [`zh_cn`].
#[must_use]
pub fn en() -> Language {
    let mut common = TextTable::new();
    common.insert_text("confirm", "OK");
    common.insert_text("cancel", "Cancel");
    common.insert_text("loading", "Loading...");
    common.insert_text("empty", "No data");
    common.insert_text("search", "Search");
    common.insert_text("reset", "Reset");

    let mut pagination = TextTable::new();
    pagination.insert_text("total", "Total {total}");
    pagination.insert_text("goto", "Go to");
    pagination.insert_text("page", "Page");
    pagination.insert_text("prev", "Previous");
    pagination.insert_text("next", "Next");
    pagination.insert_text("page_size", "{size}/page");

    let mut dialog = TextTable::new();
    dialog.insert_text("title", "Notice");
    dialog.insert_text("close", "Close");

    let mut popconfirm = TextTable::new();
    popconfirm.insert_text("confirm", "OK");
    popconfirm.insert_text("cancel", "Cancel");

    let mut table = TextTable::new();
    table.insert_text("empty", "No data");
    table.insert_text("sum", "Sum");
    table.insert_text("selected", "{count} selected");

    let mut select = TextTable::new();
    select.insert_text("placeholder", "Select");
    select.insert_text("no_match", "No matching data");

    let mut upload = TextTable::new();
    upload.insert_text("drop", "Drop file here");
    upload.insert_text("click", "Click to upload");
    upload.insert_text("limit", "Up to {limit} files");
    upload.insert_text("size_exceeded", "File size must not exceed {size}");

    let root = TextTable::new()
        .with_table("common", common)
        .with_table("pagination", pagination)
        .with_table("dialog", dialog)
        .with_table("popconfirm", popconfirm)
        .with_table("table", table)
        .with_table("select", select)
        .with_table("upload", upload);

    Language::new("en", root)
}
