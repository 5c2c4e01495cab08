fn main() {
    // ScreenSaverView lives in the ScreenSaver framework, which the objc2
    // crates do not link for us.
    #[cfg(target_os = "macos")]
    {
        println!("cargo:rustc-link-lib=framework=ScreenSaver");
        println!("cargo:rustc-link-lib=framework=AppKit");
    }
}
