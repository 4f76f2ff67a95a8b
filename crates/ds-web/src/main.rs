use ds_web::app_root::AppRoot;

fn main() {
    ds_web::app::logging::init();
    dioxus::launch(AppRoot);
}
