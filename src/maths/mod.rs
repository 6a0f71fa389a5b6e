pub mod hyperlibm;
