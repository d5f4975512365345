mod enter;
mod init;
