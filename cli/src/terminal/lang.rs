//! Prompt and label strings per display language.
//!
//! Only the terminal layer reads these; scanning code never sees a language.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn texts(self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
        }
    }
}

pub struct Texts {
    pub menu_title: &'static str,
    pub menu_options: [&'static str; 4],
    pub menu_exit: &'static str,
    pub menu_choose: &'static str,
    pub goodbye: &'static str,
    pub invalid_option: &'static str,

    pub network_prompt: &'static str,
    pub invalid_network: &'static str,
    pub ports_prompt: &'static str,
    pub port_prompt: &'static str,
    pub invalid_ports: &'static str,
    pub added_port: &'static str,
    pub next_action: &'static str,

    pub scanning: &'static str,
    pub with_ports: &'static str,
    pub scanning_port: &'static str,
    pub on_host: &'static str,
    pub own_network: &'static str,
    pub public_ip: &'static str,

    pub results_header: &'static str,
    pub no_open_ports: &'static str,
    pub open: &'static str,
    pub closed: &'static str,
    pub scan_complete: &'static str,
    pub hosts_found: &'static str,
    pub report_saved: &'static str,
    pub report_failed: &'static str,
}

pub static EN: Texts = Texts {
    menu_title: "main menu",
    menu_options: [
        "Scan a network",
        "Scan your own network",
        "Vulnerability scan of your public IP",
        "Show your public IP",
    ],
    menu_exit: "Exit",
    menu_choose: "Choose an option:",
    goodbye: "Thank you for using NetScan!",
    invalid_option: "Invalid option. Please choose again.",

    network_prompt: "Enter the network to scan (e.g., 192.168.1.0/24):",
    invalid_network: "Invalid network format.",
    ports_prompt: "Enter the ports to scan (comma-separated, e.g., 22,80,443):",
    port_prompt: "Enter the port to scan:",
    invalid_ports: "Invalid port.",
    added_port: "Added port to scan:",
    next_action: "Choose an option: (1) Scan another port, (2) Test the same ports again, (3) Back to main menu:",

    scanning: "Scanning",
    with_ports: "with ports",
    scanning_port: "Scanning port",
    on_host: "on host",
    own_network: "Scanning own network",
    public_ip: "Your public IP address",

    results_header: "scan results",
    no_open_ports: "No open ports found.",
    open: "open",
    closed: "closed",
    scan_complete: "Scan complete",
    hosts_found: "hosts with open ports",
    report_saved: "Results saved to",
    report_failed: "Could not save results",
};

pub static PT: Texts = Texts {
    menu_title: "menu principal",
    menu_options: [
        "Escanear uma rede",
        "Escanear a própria rede",
        "Escaneamento de vulnerabilidades do seu IP público",
        "Mostrar seu IP público",
    ],
    menu_exit: "Sair",
    menu_choose: "Escolha uma opção:",
    goodbye: "Obrigado por usar o NetScan!",
    invalid_option: "Opção inválida. Por favor, escolha novamente.",

    network_prompt: "Digite a rede a ser escaneada (ex.: 192.168.1.0/24):",
    invalid_network: "Formato de rede inválido.",
    ports_prompt: "Digite as portas a escanear (separadas por vírgula, ex.: 22,80,443):",
    port_prompt: "Digite a porta a escanear:",
    invalid_ports: "Porta inválida.",
    added_port: "Porta adicionada ao escaneamento:",
    next_action: "Escolha uma opção: (1) Escanear outra porta, (2) Testar as mesmas portas novamente, (3) Voltar ao menu principal:",

    scanning: "Escaneando",
    with_ports: "com as portas",
    scanning_port: "Escaneando a porta",
    on_host: "no host",
    own_network: "Escaneando a própria rede",
    public_ip: "Seu endereço IP público",

    results_header: "resultados",
    no_open_ports: "Nenhuma porta aberta encontrada.",
    open: "aberta",
    closed: "fechada",
    scan_complete: "Escaneamento concluído",
    hosts_found: "hosts com portas abertas",
    report_saved: "Resultados salvos em",
    report_failed: "Não foi possível salvar os resultados",
};
